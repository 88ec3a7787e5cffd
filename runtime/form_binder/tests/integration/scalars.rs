use form_binder::{Binder, FormValues};

fn form(query: &str) -> FormValues {
    FormValues::parse(query.as_bytes())
}

#[test]
fn decimal_strings_round_trip() {
    let form = form("i8=-128&i64=-9223372036854775808&u8=255&u64=18446744073709551615&f32=1.5&f64=-2.25");
    let binder = Binder::new(&form);

    assert_eq!(binder.bind_value::<i8>("i8").unwrap(), i8::MIN);
    assert_eq!(binder.bind_value::<i64>("i64").unwrap(), i64::MIN);
    assert_eq!(binder.bind_value::<u8>("u8").unwrap(), u8::MAX);
    assert_eq!(binder.bind_value::<u64>("u64").unwrap(), u64::MAX);
    assert_eq!(binder.bind_value::<f32>("f32").unwrap(), 1.5);
    assert_eq!(binder.bind_value::<f64>("f64").unwrap(), -2.25);
}

#[test]
fn malformed_scalars_bind_to_zero_without_failing() {
    let form = form("small=300&negative=-1&word=abc&float=1.2.3");
    let binder = Binder::new(&form);

    let mut small = 7u8;
    binder.bind(&mut small, "small").unwrap();
    assert_eq!(small, 0);

    let mut negative = 7u32;
    binder.bind(&mut negative, "negative").unwrap();
    assert_eq!(negative, 0);

    let mut word = 7i32;
    binder.bind(&mut word, "word").unwrap();
    assert_eq!(word, 0);

    let mut float = 7.0f64;
    binder.bind(&mut float, "float").unwrap();
    assert_eq!(float, 0.0);
}

#[test]
fn strings_are_bound_verbatim() {
    let form = form("name=John+Doe&encoded=one%20two");
    let binder = Binder::new(&form);

    let mut name = String::new();
    binder.bind(&mut name, "name").unwrap();
    assert_eq!(name, "John Doe");

    let encoded: &str = binder.bind_value("encoded").unwrap();
    assert_eq!(encoded, "one two");
}

#[test]
fn only_true_on_and_one_are_true() {
    let form = form("a=true&b=ON&c=%201%20&d=0&e=false&f=yes&g=TrUe");
    let binder = Binder::new(&form);

    for (key, expected) in [
        ("a", true),
        ("b", true),
        ("c", true),
        ("d", false),
        ("e", false),
        ("f", false),
        ("g", true),
    ] {
        let mut value = !expected;
        binder.bind(&mut value, key).unwrap();
        assert_eq!(value, expected, "Unexpected value for `{key}`");
    }
}

#[test]
fn first_value_wins_for_scalars() {
    let form = form("id=1&id=2");
    let id: u32 = Binder::new(&form).bind_value("id").unwrap();
    assert_eq!(id, 1);
}

#[test]
fn unit_enums_are_bound_by_variant_name() {
    #[derive(serde::Deserialize, Debug, PartialEq)]
    #[serde(rename_all = "lowercase")]
    enum Sort {
        Asc,
        Desc,
    }

    let form = form("sort=desc&bogus=sideways");
    let binder = Binder::new(&form);
    assert_eq!(binder.bind_value::<Sort>("sort").unwrap(), Sort::Desc);
    assert_eq!(binder.bind_value::<Sort>("bogus").unwrap(), Sort::Asc);
}

#[test]
fn binding_twice_is_idempotent() {
    #[derive(serde::Deserialize, Debug, PartialEq)]
    #[allow(non_snake_case)]
    struct User {
        Name: String,
        Age: u8,
    }

    let form = form("user.Name=astaxie&user.Age=30&ol[0]=1&ol[2]=3&ul[]=a");
    let binder = Binder::new(&form);

    let first: User = binder.bind_value("user").unwrap();
    let second: User = binder.bind_value("user").unwrap();
    assert_eq!(first, second);

    let first: Vec<u8> = binder.bind_value("ol").unwrap();
    let second: Vec<u8> = binder.bind_value("ol").unwrap();
    assert_eq!(first, second);
}
