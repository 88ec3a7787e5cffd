use form_binder::{Binder, BinderConfig, FormValues};

fn form(query: &str) -> FormValues {
    FormValues::parse(query.as_bytes())
}

#[test]
fn indexed_elements() {
    let form = form("ol[0]=1&ol[1]=2");
    let mut ol: Vec<i32> = Vec::with_capacity(2);
    Binder::new(&form).bind(&mut ol, "ol").unwrap();
    assert_eq!(ol, [1, 2]);
}

#[test]
fn indexed_elements_are_placed_by_index_not_by_arrival() {
    let form = form("ol[2]=c&ol[0]=a&ol[1]=b");
    let ol: Vec<String> = Binder::new(&form).bind_value("ol").unwrap();
    assert_eq!(ol, ["a", "b", "c"]);
}

#[test]
fn unindexed_elements_keep_encounter_order() {
    let form = form("ul[]=str&ul[]=array");
    let mut ul: Vec<String> = Vec::new();
    Binder::new(&form).bind(&mut ul, "ul").unwrap();
    assert_eq!(ul, ["str", "array"]);
}

#[test]
fn unindexed_elements_are_appended_after_indexed_ones() {
    let form = form("a[0]=x&a[]=y");
    let a: Vec<String> = Binder::new(&form).bind_value("a").unwrap();
    assert_eq!(a, ["x", "y"]);
}

#[test]
fn gaps_are_filled_with_zero_values() {
    let form = form("ids[1]=10&ids[4]=40");
    let ids: Vec<u32> = Binder::new(&form).bind_value("ids").unwrap();
    assert_eq!(ids, [0, 10, 0, 0, 40]);
}

#[test]
fn no_matching_keys_yield_an_empty_sequence() {
    let form = form("other[0]=1&ids=1");
    let mut ids = vec![1u32, 2, 3];
    Binder::new(&form).bind(&mut ids, "ids").unwrap();
    assert!(ids.is_empty());
}

#[test]
fn a_bad_element_does_not_abort_the_bind() {
    let form = form("ids[0]=1&ids[1]=two&ids[2]=3&ids[x]=4");
    let ids: Vec<i64> = Binder::new(&form).bind_value("ids").unwrap();
    assert_eq!(ids, [1, 0, 3]);
}

#[test]
fn elements_can_be_structs() {
    #[derive(serde::Deserialize, Debug, PartialEq)]
    #[allow(non_snake_case)]
    struct User {
        Name: String,
        Age: u8,
    }

    let form = form("users[1].Name=bob&users[0].Name=alice&users[0].Age=30&users[1].Unknown=1");
    let users: Vec<User> = Binder::new(&form).bind_value("users").unwrap();
    assert_eq!(
        users,
        [
            User {
                Name: "alice".into(),
                Age: 30
            },
            User {
                Name: "bob".into(),
                Age: 0
            },
        ]
    );
}

#[test]
fn unindexed_elements_are_bound_by_literal() {
    #[derive(serde::Deserialize, Debug, PartialEq, Default)]
    struct Point {
        x: i32,
    }

    let form = form("points[]=1");
    let points: Vec<Point> = Binder::new(&form).bind_value("points").unwrap();
    assert_eq!(points, [Point::default()]);
}

#[test]
fn indices_above_the_configured_limit_are_ignored() {
    let form = form("ids[0]=1&ids[4294967295]=2&ids[3]=4");
    let config: BinderConfig = serde_json::from_str(r#"{"max_slice_index": 3}"#).unwrap();
    let ids: Vec<u8> = Binder::new(&form)
        .with_config(config)
        .bind_value("ids")
        .unwrap();
    assert_eq!(ids, [1, 0, 0, 4]);
}
