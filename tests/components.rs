//! End-to-end behavior of catalog and built components.

use std::sync::{Arc, Mutex};

use boxstyle::{
    make_component, Catalog, Component, ComponentName, ComponentOptions, CustomProps, Element,
    MemoryStyleCache, Mode, Node, Props, StyleCache, StyleObject, Target, Value, ValueMap,
};

/// Wraps a memory cache and remembers the last style object it resolved.
#[derive(Default)]
struct Spy {
    inner: MemoryStyleCache,
    last: Mutex<Option<StyleObject>>,
}

impl Spy {
    fn last(&self) -> StyleObject {
        self.last.lock().unwrap().clone().expect("nothing resolved")
    }
}

impl StyleCache for Spy {
    fn class_name(&self, styles: &StyleObject, class_name: Option<&str>) -> Option<String> {
        *self.last.lock().unwrap() = Some(styles.clone());
        self.inner.class_name(styles, class_name)
    }
}

fn sorted(styles: &StyleObject) -> Vec<(String, Value)> {
    let mut entries: Vec<(String, Value)> = styles
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries
}

#[test]
fn test_override_order_through_builder() {
    let spy = Arc::new(Spy::default());
    let text = make_component(
        ComponentOptions::new("Text")
            .default_styles(StyleObject::new().set("color", "red").set("margin", 1)),
        None,
    )
    .with_cache(Arc::clone(&spy));

    text.render(Props::new().set("color", "blue"));

    assert_eq!(
        spy.last(),
        StyleObject::new().set("color", "blue").set("margin", 1)
    );
}

#[test]
fn test_transform_precedence_through_builder() {
    let spy = Arc::new(Spy::default());
    let custom = CustomProps::new().add("padding", |v| {
        let px = v.as_f64()?;
        Some(StyleObject::new().set("padding", format!("{}px {}px", px, px * 2.0)))
    });
    let button = make_component(ComponentOptions::new("Button").target("button"), Some(custom))
        .with_cache(Arc::clone(&spy));

    button.render(Props::new().set("padding", 4));
    assert_eq!(spy.last().get("padding"), Some(&Value::from("4px 8px")));

    // A value the transform rejects never becomes a literal style.
    button.render(Props::new().set("padding", "10px"));
    assert!(spy.last().is_empty());
}

#[test]
fn test_nullish_drop_through_catalog() {
    let spy = Arc::new(Spy::default());
    let catalog = Catalog::with_cache(Mode::Production, spy.clone());

    let el = catalog
        .get(ComponentName::Box)
        .render(Props::new().set("foo", Value::Null).set("bar", Value::Undefined));

    assert!(spy.last().is_empty());
    assert!(el.props.is_empty());
}

#[test]
fn test_class_name_omitted_when_nothing_resolves() {
    struct Never;

    impl StyleCache for Never {
        fn class_name(&self, _: &StyleObject, _: Option<&str>) -> Option<String> {
            None
        }
    }

    let plain = make_component(ComponentOptions::new("Plain"), None).with_cache(Never);
    let el = plain.render(Props::new().class_name("explicit").set("color", "red"));
    assert!(!el.props.contains_key("className"));

    let catalog = Catalog::with_cache(Mode::Production, Arc::new(Never));
    let el = catalog
        .get(ComponentName::Row)
        .render(Props::new().class_name("explicit"));
    assert!(!el.props.contains_key("className"));
}

#[test]
fn test_composition_inheritance() {
    let spy = Arc::new(Spy::default());
    let hover = CustomProps::new().add("onHover", |v| {
        Some(StyleObject::new().set("hoverColor", v.clone()))
    });
    let card = make_component(ComponentOptions::new("Card"), Some(hover)).with_cache(Arc::clone(&spy));
    let title = card.make_component(
        ComponentOptions::new("Title")
            .target("h2")
            .default_styles(StyleObject::new().set("fontWeight", "bold")),
    );

    card.render(Props::new().set("onHover", "teal"));
    let from_parent = spy.last();

    title.render(Props::new().set("onHover", "teal"));
    let from_child = spy.last();

    assert_eq!(title.display_name(), format!("{}.{}", card.display_name(), "Title"));
    assert_eq!(from_parent.get("hoverColor"), from_child.get("hoverColor"));
    assert_eq!(from_child.get("fontWeight"), Some(&Value::from("bold")));
    assert!(!from_child.contains_key("onHover"));
}

#[test]
fn test_same_content_same_class_name_across_components() {
    let cache: Arc<MemoryStyleCache> = Arc::new(MemoryStyleCache::new());
    let catalog = Catalog::with_cache(Mode::Production, cache.clone());
    let row = make_component(
        ComponentOptions::new("MyRow")
            .default_styles(StyleObject::new().set("flexDirection", "row").set("display", "flex")),
        None,
    )
    .with_cache(Arc::clone(&cache));

    let a = catalog.get(ComponentName::Row).render(Props::new());
    let b = row.render(Props::new());

    assert_eq!(a.class_name(), b.class_name());
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_media_queries_reach_the_cache() {
    let spy = Arc::new(Spy::default());
    let catalog = Catalog::with_cache(Mode::Production, spy.clone());
    let queries = ValueMap::new().set("sm", "screen and (max-width: 640px)");

    catalog.get(ComponentName::Block).render(
        Props::new()
            .media_queries(queries.clone())
            .set("smColor", "red"),
    );

    assert_eq!(
        sorted(&spy.last()),
        vec![
            ("display".to_string(), Value::from("block")),
            ("mediaQueries".to_string(), Value::Map(queries)),
            ("smColor".to_string(), Value::from("red")),
        ]
    );
}

#[test]
fn test_nested_components_expand_to_host_tree() {
    let cache = Arc::new(MemoryStyleCache::new());
    let catalog = Catalog::with_cache(Mode::Production, cache.clone());
    let list = make_component(
        ComponentOptions::new("List")
            .target(catalog.get(ComponentName::Col))
            .component_props(["role"]),
        None,
    )
    .with_cache(Arc::clone(&cache));

    let item = catalog
        .get(ComponentName::Inline)
        .render(Props::new().component("li").child("one"));
    let el = list.render(Props::new().set("role", "list").set("gap", 4).child(item));

    assert!(matches!(el.target, Target::Component(_)));

    let host = el.expand();
    assert_eq!(host.target, Target::host("div"));
    assert!(host.class_name().is_some());
    match &host.children[0] {
        Node::Element(Element { target, .. }) => assert_eq!(target, &Target::host("li")),
        other => panic!("expected element child, got {:?}", other),
    }
}

#[test]
fn test_props_from_json() {
    let cache = Arc::new(MemoryStyleCache::new());
    let values: ValueMap =
        serde_json::from_str(r#"{"className": "hero", "fontSize": 32, "color": null}"#).unwrap();

    let catalog = Catalog::with_cache(Mode::Production, cache);
    let el = catalog.get(ComponentName::Block).render(Props::from(values));

    let class_name = el.class_name().unwrap();
    assert!(class_name.starts_with("hero _"));
}
