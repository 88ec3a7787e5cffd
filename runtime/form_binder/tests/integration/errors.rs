use form_binder::errors::ErrorKind;
use form_binder::{Binder, FormValues};

#[test]
fn missing_scalar_leaves_the_destination_untouched() {
    let form = FormValues::parse(b"other=1");
    let mut id = 42u32;
    let err = Binder::new(&form).bind(&mut id, "id").unwrap_err();

    assert_eq!(id, 42);
    assert_eq!(err.key(), "id");
    assert_eq!(
        err.kind(),
        &ErrorKind::EmptyValue {
            key: "id".to_owned()
        }
    );
    insta::assert_snapshot!(err, @"Failed to bind `id`. There is no value for `id`, neither in the route parameters nor in the form values");
}

#[test]
fn empty_scalar_is_an_error() {
    let form = FormValues::parse(b"name=");
    let mut name = String::from("unchanged");
    let err = Binder::new(&form).bind(&mut name, "name").unwrap_err();

    assert_eq!(name, "unchanged");
    assert!(matches!(err.kind(), ErrorKind::EmptyValue { .. }));
}

#[test]
fn unsupported_top_level_type() {
    let form = FormValues::parse(b"pair=1");
    let mut pair = (1u8, 2u8);
    let err = Binder::new(&form).bind(&mut pair, "pair").unwrap_err();

    assert_eq!(pair, (1, 2));
    assert_eq!(err.path(), ".");
    insta::assert_snapshot!(err, @"Failed to bind `pair`. `(u8, u8)` is not a supported destination type. Form values can be bound into numbers, strings, booleans, unit-only enums, sequences, maps, structs with named fields and pointers to any of them.");
}

#[test]
fn unsupported_nested_type_reports_its_path() {
    #[derive(serde::Deserialize, Debug)]
    #[allow(dead_code)]
    struct Order {
        line: (u32, u32),
    }

    let form = FormValues::parse(b"order.line=1");
    let err = Binder::new(&form).bind_value::<Order>("order").unwrap_err();

    assert_eq!(err.path(), "line");
    assert!(matches!(err.kind(), ErrorKind::UnsupportedType { .. }));
}

#[test]
fn data_carrying_enum_variants_are_unsupported() {
    #[derive(serde::Deserialize, Debug)]
    #[allow(dead_code)]
    enum Shape {
        Circle(f64),
    }

    let form = FormValues::parse(b"shape=Circle");
    let err = Binder::new(&form).bind_value::<Shape>("shape").unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::UnsupportedType {
            name: "newtype enum variant"
        }
    );
}

#[test]
fn bad_elements_inside_composites_are_not_errors() {
    #[derive(serde::Deserialize, Debug, PartialEq)]
    struct Order {
        quantity: u32,
    }

    let form = FormValues::parse(b"ids[0]=x&ids[1]=2&order.quantity=many&m[k]=v");
    let binder = Binder::new(&form);

    assert_eq!(binder.bind_value::<Vec<u8>>("ids").unwrap(), [0, 2]);
    assert_eq!(
        binder.bind_value::<Order>("order").unwrap(),
        Order { quantity: 0 }
    );
    assert_eq!(
        binder
            .bind_value::<std::collections::HashMap<String, u8>>("m")
            .unwrap()
            .get("k"),
        Some(&0)
    );
}
