use serde_json::json;

use crate::{About, Leader, Resource, ResourceInput, Service, ServiceInput, Ticket};

#[test]
fn payloads_never_carry_an_id() {
    let input = ServiceInput {
        name: "Web".into(),
        slug: "web".into(),
        description: "Sites".into(),
        price: 10.5,
        photo: Some("web.png".into()),
        category: None,
    };
    let v = serde_json::to_value(&input).unwrap();
    assert!(v.get("id").is_none());
    assert_eq!(v["price"], json!(10.5));
    assert_eq!(v["category"], json!(null));
}

#[test]
fn resource_kind_uses_type_on_the_wire() {
    let r: Resource = serde_json::from_value(json!({
        "id": 3, "title": "T", "description": null, "type": "guide", "url": "g.pdf"
    }))
    .unwrap();
    assert_eq!(r.kind, "guide");
    let v = serde_json::to_value(ResourceInput { title: "T".into(), description: None, kind: "file".into(), url: "x".into() }).unwrap();
    assert_eq!(v["type"], "file");
    assert!(v.get("kind").is_none());
}

#[test]
fn optional_fields_may_be_missing() {
    let l: Leader = serde_json::from_value(json!({"id": 1, "name": "A"})).unwrap();
    assert_eq!(l.photo, None);
    assert_eq!(l.bio, None);

    let a: About = serde_json::from_value(json!({"id": 1, "content": "Hello"})).unwrap();
    assert_eq!(a.photo, None);

    // backend rows without price/photo/category still decode
    let s: Service = serde_json::from_value(json!({
        "id": 9, "name": "Web", "slug": "web", "description": "Sites"
    }))
    .unwrap();
    assert_eq!(s.price, 0.0);
}

#[test]
fn ticket_status_comes_from_server() {
    let t: Ticket = serde_json::from_value(json!({
        "id": 1, "name": "Jo", "email": "jo@x.com", "subject": "S", "message": "M", "status": "open"
    }))
    .unwrap();
    assert_eq!(t.status, "open");
}
