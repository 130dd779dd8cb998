//! Serialization of `Serialize` values into query parameters.
//!
//! This is a thin bridge over the encoders in [`query`](crate::query):
//! each field of a flat struct (or entry of a map) becomes one
//! [`QueryParameter`], built by the encoder matching its type.
//!
//! | field type                  | encoder                                  |
//! |-----------------------------|------------------------------------------|
//! | `String`, `&str`, `char`    | [`string`](crate::string)                |
//! | integers                    | [`int`](crate::int)                      |
//! | `f32`, `f64`                | [`float`](crate::float)                  |
//! | `bool`                      | [`bool`](crate::bool)                    |
//! | `Option<T>`                 | [`maybe`](crate::maybe)                  |
//! | `Vec<T>`, slices, tuples    | [`list`](crate::list) or [`bracketed_list`](crate::bracketed_list) |
//! | unit enum variants          | [`string`](crate::string) of the variant name |
//!
//! Anything nested deeper than a list of scalars is rejected.

mod key;
mod value;

use key::KeySerializer;
use value::ValueSerializer;

use serde::ser;

use crate::Config;
use crate::error::*;
use crate::query::{QueryParameter, to_query};

/// Serializes a struct or map into query parameters.
///
/// ```
/// use serde::Serialize;
/// use url_builder::{absolute, to_parameters};
///
/// #[derive(Serialize)]
/// struct Search {
///     search: String,
///     sizes: Vec<u8>,
///     maxprice: Option<f64>,
///     discounted: bool,
/// }
///
/// let search = Search {
///     search: "hat".to_owned(),
///     sizes: vec![1, 2, 3],
///     maxprice: None,
///     discounted: true,
/// };
///
/// let parameters = to_parameters(&search).unwrap();
/// assert_eq!(
///     absolute(&["products"], &parameters),
///     "/products?search=hat&sizes=1%2C2%2C3&discounted=true"
/// );
/// ```
pub fn to_parameters<T: ser::Serialize + ?Sized>(input: &T) -> Result<Vec<QueryParameter>> {
    let config = Config::default();
    config.serialize_parameters(input)
}

/// Serializes a struct or map straight into a querystring, including the
/// leading `?`.
///
/// ```
/// use std::collections::BTreeMap;
///
/// let mut map = BTreeMap::new();
/// map.insert("page", 2);
/// map.insert("limit", 50);
///
/// assert_eq!(url_builder::to_query_string(&map).unwrap(), "?limit=50&page=2");
/// ```
pub fn to_query_string<T: ser::Serialize + ?Sized>(input: &T) -> Result<String> {
    let parameters = to_parameters(input)?;
    Ok(to_query(&parameters))
}

/// A serializer collecting the top-level fields of a value as query
/// parameters.
///
/// Only structs, maps, and wrappers around them (newtypes, `Some`) are
/// accepted at the top level, since every parameter needs a key.
pub struct ParameterSerializer {
    parameters: Vec<QueryParameter>,
    config: Config,
}

impl ParameterSerializer {
    pub fn new(config: Config) -> Self {
        Self {
            parameters: Vec::new(),
            config,
        }
    }

    pub fn into_parameters(self) -> Vec<QueryParameter> {
        self.parameters
    }

    /// Encodes one field and keeps it unless it came out absent.
    fn push<T: ser::Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let parameter = value.serialize(ValueSerializer::new(key, self.config));
        #[cfg(feature = "tracing")]
        if let Err(err) = &parameter {
            tracing::debug!(key, %err, "rejecting query parameter");
        }

        let parameter = parameter?;
        if parameter.is_absent() {
            #[cfg(feature = "tracing")]
            tracing::trace!(key, "leaving absent parameter out of the query");
        } else {
            self.parameters.push(parameter);
        }
        Ok(())
    }
}

macro_rules! top_level_scalar {
    (
        $($ty:ty => $meth:ident,)*) => {
        $(
            fn $meth(self, _v: $ty) -> Result<Self::Ok> {
                Err(Error::TopLevel(stringify!($ty)))
            }
        )*
    };
}

impl<'a> ser::Serializer for &'a mut ParameterSerializer {
    type Ok = ();
    type Error = Error;
    type SerializeSeq = ser::Impossible<Self::Ok, Error>;
    type SerializeTuple = ser::Impossible<Self::Ok, Error>;
    type SerializeTupleStruct = ser::Impossible<Self::Ok, Error>;
    type SerializeTupleVariant = ser::Impossible<Self::Ok, Error>;
    type SerializeMap = ParameterMap<'a>;
    type SerializeStruct = Self;
    type SerializeStructVariant = ser::Impossible<Self::Ok, Error>;

    top_level_scalar! {
        bool => serialize_bool,
        u8  => serialize_u8,
        u16 => serialize_u16,
        u32 => serialize_u32,
        u64 => serialize_u64,
        i8  => serialize_i8,
        i16 => serialize_i16,
        i32 => serialize_i32,
        i64 => serialize_i64,
        f32 => serialize_f32,
        f64 => serialize_f64,
        char => serialize_char,
        &str => serialize_str,
        &[u8] => serialize_bytes,
    }

    /// A missing value has no parameters at all.
    fn serialize_none(self) -> Result<Self::Ok> {
        Ok(())
    }

    fn serialize_some<T: ?Sized + ser::Serialize>(self, value: &T) -> Result<Self::Ok> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Self::Ok> {
        Err(Error::TopLevel("enum"))
    }

    fn serialize_newtype_struct<T: ?Sized + ser::Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Self::Ok> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + ser::Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok> {
        Err(Error::TopLevel("enum"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Error::TopLevel("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(Error::TopLevel("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(Error::TopLevel("tuple struct"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::TopLevel("enum"))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        if let Some(len) = len {
            self.parameters.reserve(len);
        }
        Ok(ParameterMap::new(self))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        self.parameters.reserve(len);
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::TopLevel("enum"))
    }
}

impl ser::SerializeStruct for &mut ParameterSerializer {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ser::Serialize + ?Sized,
    {
        self.push(key, value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(())
    }
}

#[doc(hidden)]
pub struct ParameterMap<'s> {
    serializer: &'s mut ParameterSerializer,
    key: Option<String>,
}

impl<'a> ParameterMap<'a> {
    fn new(serializer: &'a mut ParameterSerializer) -> Self {
        Self { serializer, key: None }
    }
}

impl ser::SerializeMap for ParameterMap<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ser::Serialize + ?Sized,
    {
        self.key = Some(key.serialize(KeySerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ser::Serialize + ?Sized,
    {
        let Some(key) = self.key.take() else {
            return Err(Error::Custom(
                "internal error: map value serialized before its key".to_string(),
            ));
        };
        self.serializer.push(&key, value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(())
    }
}
