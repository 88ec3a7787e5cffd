use form_binder::{Binder, FormValues, RouteParams};

#[test]
fn route_params_are_consulted_before_form_values() {
    let form = FormValues::parse(b"id=1&name=form");
    let params: RouteParams = [("id", "2")].into_iter().collect();
    let binder = Binder::new(&form).with_route_params(&params);

    assert_eq!(binder.bind_value::<u32>("id").unwrap(), 2);
    assert_eq!(binder.bind_value::<String>("name").unwrap(), "form");
    assert_eq!(binder.param("id"), Some("2"));
    assert_eq!(binder.param("name"), None);
    assert_eq!(binder.query("id"), Some("2"));
    assert_eq!(binder.query("name"), Some("form"));
}

#[test]
fn empty_route_params_are_ignored() {
    let form = FormValues::parse(b"id=1");
    let params: RouteParams = [("id", "")].into_iter().collect();
    let binder = Binder::new(&form).with_route_params(&params);

    assert_eq!(binder.param("id"), None);
    assert_eq!(binder.bind_value::<u32>("id").unwrap(), 1);
}

#[test]
fn route_params_alone_can_satisfy_a_bind() {
    let form = FormValues::new();
    let params: RouteParams = [("slug", "hello-world")].into_iter().collect();
    let slug: String = Binder::new(&form)
        .with_route_params(&params)
        .bind_value("slug")
        .unwrap();
    assert_eq!(slug, "hello-world");
}

#[test]
fn empty_form_values_are_reported_as_missing() {
    let form = FormValues::parse(b"name=");
    assert_eq!(Binder::new(&form).query("name"), None);
}
