use astro_wheel::chart::{BodyId, CelestialBody, ChartData, DegreeMinute, FocusEvent, FocusState};
use astro_wheel::rendering::{ChartSpecGenerator, Shape};

fn chart() -> ChartData {
    ChartData::new(
        15.0,
        vec![
            CelestialBody::new("Sun", 45.5),
            CelestialBody::new("Moon", 200.25),
        ],
    )
}

fn center_texts(shapes: &[Shape]) -> Vec<String> {
    // centre content is emitted last
    shapes
        .iter()
        .rev()
        .take(3)
        .filter_map(|s| match s {
            Shape::Text { content, .. } => Some(content.clone()),
            _ => None,
        })
        .rev()
        .collect()
}

#[test]
fn test_focused_detail_for_natal_body() {
    let chart = chart();
    let state = FocusState::Idle.transition(FocusEvent::PointerEnter(BodyId::natal("Sun")));
    let detail = state.detail(&chart, None).unwrap();
    assert_eq!(detail.id.name, "Sun");
    assert_eq!(detail.position, DegreeMinute { degree: 15, minute: 30 });
    assert_eq!(detail.sign, "Taurus");
}

#[test]
fn test_focused_detail_for_transit_body() {
    let chart = chart();
    let transits = vec![CelestialBody::new("Sun", 100.0)];
    let state = FocusState::Focused(BodyId::transit("Sun"));
    let detail = state.detail(&chart, Some(transits.as_slice())).unwrap();
    assert!(detail.id.is_overlay());
    assert_eq!(detail.longitude, 100.0);
    assert_eq!(detail.sign, "Cancer");
}

#[test]
fn test_missing_body_has_no_detail() {
    let state = FocusState::Focused(BodyId::transit("Sun"));
    assert!(state.detail(&chart(), None).is_none());
    let state = FocusState::Focused(BodyId::natal("Pluto"));
    assert!(state.detail(&chart(), None).is_none());
}

#[test]
fn test_enter_moves_focus_between_bodies() {
    let mut state = FocusState::default();
    state.apply(FocusEvent::PointerEnter(BodyId::natal("Sun")));
    state.apply(FocusEvent::PointerEnter(BodyId::natal("Moon")));
    assert_eq!(state.focused(), Some(&BodyId::natal("Moon")));
    state.apply(FocusEvent::PointerLeave);
    assert!(state.focused().is_none());
}

#[test]
fn test_center_content_switches_with_focus() {
    let chart = chart();
    let generator = ChartSpecGenerator::new();

    let idle = generator.generate(Some(&chart), None, &FocusState::Idle);
    assert!(idle.focused.is_none());
    assert_eq!(center_texts(&idle.shapes), vec!["Asc", "15°00'", "Aries"]);

    let focus = FocusState::Focused(BodyId::natal("Moon"));
    let focused = generator.generate(Some(&chart), None, &focus);
    assert_eq!(focused.focused.as_ref().unwrap().id.name, "Moon");
    assert_eq!(center_texts(&focused.shapes), vec!["Moon", "20°15'", "Libra"]);

    // geometry is unaffected by focus
    assert_eq!(idle.rings, focused.rings);
    assert_eq!(idle.aspects, focused.aspects);
}
