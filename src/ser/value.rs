use serde::ser::{self, Serialize};

use crate::config::{Config, ListFormat};
use crate::error::*;
use crate::query::{self, QueryParameter};

/// Serializes a single field value into a [`QueryParameter`] under `key`.
pub(super) struct ValueSerializer<'k> {
    key: &'k str,
    config: Config,
    in_list: bool,
}

impl<'k> ValueSerializer<'k> {
    pub(super) fn new(key: &'k str, config: Config) -> Self {
        Self {
            key,
            config,
            in_list: false,
        }
    }

    fn list(self) -> Result<ListSerializer<'k>> {
        if self.in_list {
            return Err(Error::Unsupported("a sequence inside a sequence"));
        }
        Ok(ListSerializer {
            key: self.key,
            config: self.config,
            elements: Vec::new(),
        })
    }
}

macro_rules! serialize_itoa {
    (
        $($ty:ty => $meth:ident,)*) => {
        $(
            fn $meth(self, v: $ty) -> Result<Self::Ok> {
                Ok(query::int(self.key, v))
            }
        )*
    };
}

macro_rules! serialize_ryu {
    (
        $($ty:ty => $meth:ident,)*) => {
        $(
            fn $meth(self, v: $ty) -> Result<Self::Ok> {
                Ok(query::float(self.key, v))
            }
        )*
    };
}

impl<'k> ser::Serializer for ValueSerializer<'k> {
    type Ok = QueryParameter;
    type Error = Error;
    type SerializeSeq = ListSerializer<'k>;
    type SerializeTuple = ListSerializer<'k>;
    type SerializeTupleStruct = ListSerializer<'k>;
    type SerializeTupleVariant = ser::Impossible<Self::Ok, Error>;
    type SerializeMap = ser::Impossible<Self::Ok, Error>;
    type SerializeStruct = ser::Impossible<Self::Ok, Error>;
    type SerializeStructVariant = ser::Impossible<Self::Ok, Error>;

    serialize_itoa! {
        u8  => serialize_u8,
        u16 => serialize_u16,
        u32 => serialize_u32,
        u64 => serialize_u64,
        u128 => serialize_u128,
        i8  => serialize_i8,
        i16 => serialize_i16,
        i32 => serialize_i32,
        i64 => serialize_i64,
        i128 => serialize_i128,
    }
    serialize_ryu! {
        f32 => serialize_f32,
        f64 => serialize_f64,
    }

    fn serialize_bool(self, v: bool) -> Result<Self::Ok> {
        Ok(query::bool(self.key, v))
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        let mut b = [0; 4];
        let value = v.encode_utf8(&mut b);
        self.serialize_str(value)
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        if self.config.skip_empty_strings {
            Ok(query::non_empty_string(self.key, v))
        } else {
            Ok(query::string(self.key, v))
        }
    }

    fn serialize_bytes(self, _value: &[u8]) -> Result<Self::Ok> {
        Err(Error::Unsupported("a byte string"))
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Ok(QueryParameter::Absent)
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Self::Ok> {
        value.serialize(self)
    }

    /// Units carry no data, so they become a bare `key=`.
    fn serialize_unit(self) -> Result<Self::Ok> {
        Ok(query::string(self.key, ""))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        Ok(query::string(self.key, variant))
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Self::Ok> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok> {
        Err(Error::Unsupported("an enum variant with data"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        self.list()
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        self.list()
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.list()
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::Unsupported("an enum variant with data"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::Unsupported("a nested map"))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(Error::Unsupported("a nested struct"))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::Unsupported("an enum variant with data"))
    }
}

/// Collects the elements of a sequence and joins them into one parameter.
pub(super) struct ListSerializer<'k> {
    key: &'k str,
    config: Config,
    elements: Vec<QueryParameter>,
}

impl ListSerializer<'_> {
    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        let element = value.serialize(ValueSerializer {
            key: "",
            config: self.config,
            in_list: true,
        })?;
        self.elements.push(element);
        Ok(())
    }

    fn finish(self) -> QueryParameter {
        // elements are encoded already, pass them through as they are
        let encoded = |_: &str, element: QueryParameter| element;
        match self.config.list_format {
            ListFormat::Comma => query::list(encoded, self.key, self.elements),
            ListFormat::Bracketed => query::bracketed_list(encoded, self.key, self.elements),
        }
    }
}

impl ser::SerializeSeq for ListSerializer<'_> {
    type Ok = QueryParameter;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for ListSerializer<'_> {
    type Ok = QueryParameter;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for ListSerializer<'_> {
    type Ok = QueryParameter;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(self.finish())
    }
}
