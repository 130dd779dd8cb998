use pretty_assertions::assert_eq;
use serde::Serialize;
use std::collections::BTreeMap;
use url_builder::{Config, Error, ListFormat, QueryParameter};

#[derive(Clone, Debug, PartialEq, Serialize)]
struct Filters {
    search: String,
    sizes: Vec<u8>,
    maxprice: Option<f64>,
    discounted: bool,
}

fn filters() -> Filters {
    Filters {
        search: "red hat".to_string(),
        sizes: vec![1, 2, 3],
        maxprice: Some(9.99),
        discounted: false,
    }
}

#[test]
fn serialize_struct() {
    let s = url_builder::to_query_string(&filters()).unwrap();
    insta::assert_snapshot!(s, @"?search=red%20hat&sizes=1%2C2%2C3&maxprice=9.99&discounted=false");
}

#[test]
fn serialize_struct_matches_encoders() {
    let params = url_builder::to_parameters(&filters()).unwrap();
    assert_eq!(
        params,
        vec![
            url_builder::string("search", "red hat"),
            url_builder::list(url_builder::int, "sizes", [1u8, 2, 3]),
            url_builder::float("maxprice", 9.99),
            url_builder::bool("discounted", false),
        ]
    );
}

#[test]
fn serialize_option() {
    #[derive(Debug, Serialize, PartialEq)]
    struct Query {
        vec: Option<Vec<u8>>,
        name: Option<String>,
    }

    let query = Query {
        vec: None,
        name: None,
    };
    assert_eq!(url_builder::to_query_string(&query).unwrap(), "");
    assert_eq!(url_builder::to_parameters(&query).unwrap(), Vec::<QueryParameter>::new());

    let query = Query {
        vec: Some(vec![1, 2]),
        name: Some("Acme".to_string()),
    };
    assert_eq!(
        url_builder::to_query_string(&query).unwrap(),
        "?vec=1%2C2&name=Acme"
    );
}

#[test]
fn serialize_empty_vec_is_omitted() {
    #[derive(Debug, Serialize, PartialEq)]
    struct Query {
        a: u8,
        ids: Vec<u32>,
    }

    let query = Query { a: 1, ids: vec![] };
    assert_eq!(url_builder::to_query_string(&query).unwrap(), "?a=1");
}

#[test]
fn serialize_bracketed_lists() {
    let config = Config::new().list_format(ListFormat::Bracketed);
    let s = config.serialize_query(&filters()).unwrap();
    insta::assert_snapshot!(s, @"?search=red%20hat&sizes=%5B1%2C2%2C3%5D&maxprice=9.99&discounted=false");
}

#[test]
fn serialize_skip_empty_strings() {
    #[derive(Debug, Serialize, PartialEq)]
    struct Query<'a> {
        q: &'a str,
        tags: Vec<&'a str>,
        page: u32,
    }

    let query = Query {
        q: "",
        tags: vec!["", "new", ""],
        page: 1,
    };

    assert_eq!(
        url_builder::to_query_string(&query).unwrap(),
        "?q=&tags=%2Cnew%2C&page=1"
    );

    let config = Config::new().skip_empty_strings(true);
    assert_eq!(config.serialize_query(&query).unwrap(), "?tags=new&page=1");
}

#[test]
fn serialize_enum() {
    #[derive(Debug, Serialize, PartialEq)]
    #[serde(rename_all = "lowercase")]
    enum Order {
        Ascending,
        Descending,
    }

    #[derive(Debug, Serialize, PartialEq)]
    struct Query {
        order: Order,
        also: Vec<Order>,
    }

    let query = Query {
        order: Order::Descending,
        also: vec![Order::Ascending, Order::Descending],
    };
    assert_eq!(
        url_builder::to_query_string(&query).unwrap(),
        "?order=descending&also=ascending%2Cdescending"
    );
}

#[test]
fn serialize_newtypes_and_tuples() {
    #[derive(Debug, Serialize, PartialEq)]
    struct UserId(u64);

    #[derive(Debug, Serialize, PartialEq)]
    struct Query {
        user: UserId,
        range: (i32, i32),
        flag: char,
        nothing: (),
    }

    let query = Query {
        user: UserId(7),
        range: (-5, 5),
        flag: '&',
        nothing: (),
    };
    assert_eq!(
        url_builder::to_query_string(&query).unwrap(),
        "?user=7&range=-5%2C5&flag=%26&nothing="
    );
}

#[test]
fn serialize_flatten() {
    #[derive(Serialize, Debug, PartialEq)]
    struct Query {
        a: u8,
        #[serde(flatten)]
        common: CommonParams,
    }

    #[derive(Serialize, Debug, PartialEq)]
    struct CommonParams {
        limit: u64,
        offset: u64,
    }

    let query = Query {
        a: 1,
        common: CommonParams {
            limit: 100,
            offset: 50,
        },
    };
    assert_eq!(
        url_builder::to_query_string(&query).unwrap(),
        "?a=1&limit=100&offset=50"
    );
}

#[test]
fn serialize_map_in_key_order() {
    let mut map = BTreeMap::new();
    map.insert("b", vec!["x y"]);
    map.insert("a", vec![]);
    map.insert("c", vec!["1", "2"]);

    let params = url_builder::to_parameters(&map).unwrap();
    let keys: Vec<_> = params.iter().filter_map(QueryParameter::key).collect();
    assert_eq!(keys, vec!["b", "c"]);
    assert_eq!(url_builder::to_query(&params), "?b=x%2520y&c=1%2C2");
}

#[test]
fn nested_values_are_rejected() {
    #[derive(Debug, Serialize)]
    struct Address {
        city: String,
    }

    #[derive(Debug, Serialize)]
    struct Nested {
        address: Address,
    }

    #[derive(Debug, Serialize)]
    struct Grid {
        rows: Vec<Vec<u8>>,
    }

    let err = url_builder::to_parameters(&Nested {
        address: Address {
            city: "Carrot City".to_string(),
        },
    })
    .unwrap_err();
    assert_eq!(err, Error::Unsupported("a nested struct"));
    assert!(err.to_string().contains("a nested struct"), "got: {}", err);

    let err = url_builder::to_parameters(&Grid {
        rows: vec![vec![1], vec![2]],
    })
    .unwrap_err();
    assert_eq!(err, Error::Unsupported("a sequence inside a sequence"));
}

#[test]
fn data_enums_are_rejected() {
    #[derive(Debug, Serialize)]
    enum Shape {
        Circle(f32),
    }

    #[derive(Debug, Serialize)]
    struct Query {
        shape: Shape,
    }

    let err = url_builder::to_parameters(&Query {
        shape: Shape::Circle(1.0),
    })
    .unwrap_err();
    assert_eq!(err, Error::Unsupported("an enum variant with data"));
}

#[test]
fn custom_errors_propagate() {
    struct Broken;

    impl Serialize for Broken {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("broken value"))
        }
    }

    #[derive(Serialize)]
    struct Query {
        field: Broken,
    }

    let err = url_builder::to_parameters(&Query { field: Broken }).unwrap_err();
    assert_eq!(err, Error::Custom("broken value".to_string()));
    assert_eq!(err.to_string(), "broken value");
}

#[test]
fn serialize_whole_number_floats() {
    #[derive(Debug, Serialize, PartialEq)]
    struct Query {
        price: f64,
        ratio: f32,
    }

    let query = Query {
        price: 3.0,
        ratio: 0.5,
    };
    assert_eq!(
        url_builder::to_parameters(&query).unwrap(),
        vec![
            url_builder::float("price", 3.0),
            url_builder::float("ratio", 0.5f32),
        ]
    );
    assert_eq!(
        url_builder::to_query_string(&query).unwrap(),
        "?price=3&ratio=0.5"
    );
}
