use std::cell::Cell;
use std::fmt::Write as _;
use std::rc::Rc;

use overlay_core::{
    Color, FixedMetrics, PointerEvent, Scene, SceneNode, Topology, UiScale, Viewport,
    with_ui_scale, with_viewport,
};
use overlay_ui::{Checkbox, DrawContext, Panel, Widget};

const VP: Viewport = Viewport {
    width: 800.0,
    height: 500.0,
};

fn dump(scene: &Scene) -> String {
    let mut out = String::new();
    for node in &scene.nodes {
        match node {
            SceneNode::Batch {
                topology,
                points,
                line_width,
                color,
            } => {
                let kind = match topology {
                    Topology::LineLoop => "loop",
                    Topology::Lines => "lines",
                };
                let _ = write!(out, "{kind} w={line_width} {}", hex(*color));
                for p in points {
                    let _ = write!(out, " ({:.1}, {:.1})", p.x, p.y);
                }
                out.push('\n');
            }
            SceneNode::Text {
                pos,
                text,
                size,
                dpi,
                color,
            } => {
                let _ = writeln!(
                    out,
                    "text {text:?} size={size} dpi={dpi} {} at ({:.1}, {:.1})",
                    hex(*color),
                    pos.x,
                    pos.y
                );
            }
        }
    }
    out.trim_end().to_string()
}

fn hex(c: Color) -> String {
    format!("#{:02x}{:02x}{:02x}{:02x}", c.0, c.1, c.2, c.3)
}

fn render(panel: &Panel) -> Scene {
    let mut scene = Scene::new();
    let mut text = FixedMetrics::default();
    with_viewport(VP, || {
        panel.draw(&mut DrawContext::new(&mut scene, &mut text));
    });
    scene
}

fn checkbox(x: f32, y: f32, label: &str) -> Checkbox {
    let mut cb = Checkbox::new(x, y, 120.0, 20.0);
    cb.set_text(label);
    cb.set_mark_color(Color::from_hex("#33E6E6"));
    cb
}

fn count_changes(panel: &mut Panel, id: overlay_ui::WidgetId) -> Rc<Cell<usize>> {
    let calls = Rc::new(Cell::new(0));
    let c = calls.clone();
    panel
        .get_mut::<Checkbox>(id)
        .unwrap()
        .set_state_changed(move |_| {
            c.set(c.get() + 1);
            Ok(())
        });
    calls
}

#[test]
fn scenario_from_layout_to_click() {
    let mut panel = Panel::new();
    let id = with_viewport(VP, || panel.add(checkbox(10.0, 10.0, "Checkbox")));
    let calls = count_changes(&mut panel, id);

    let cb = panel.get::<Checkbox>(id).unwrap();
    let outline = cb.outline_vertices().unwrap();
    assert_eq!((outline[0].x, outline[0].y), (10.0, 490.0));
    assert_eq!((outline[2].x, outline[2].y), (26.0, 474.0));

    with_viewport(VP, || {
        assert!(panel.get::<Checkbox>(id).unwrap().is_in_rect(15.0, 485.0));
        assert!(!panel.get::<Checkbox>(id).unwrap().is_in_rect(30.0, 485.0));

        assert!(!panel.mouse_up(30.0, 485.0));
        assert!(panel.mouse_up(15.0, 485.0));
    });

    assert!(panel.get::<Checkbox>(id).unwrap().is_checked());
    assert_eq!(calls.get(), 1);
}

#[test]
fn recorded_frame() {
    let mut panel = Panel::new();
    let first = with_viewport(VP, || {
        let first = panel.add(checkbox(10.0, 10.0, "Grid"));
        panel.add(checkbox(10.0, 40.0, "Wireframe"));
        first
    });
    panel.get_mut::<Checkbox>(first).unwrap().set_checked(true);

    insta::assert_snapshot!(dump(&render(&panel)), @r#"
    lines w=3 #33e6e6ff (14.0, 486.0) (22.0, 478.0) (22.0, 486.0) (14.0, 478.0)
    loop w=2 #ffffffff (10.0, 490.0) (26.0, 490.0) (26.0, 474.0) (10.0, 474.0)
    text "Grid" size=16 dpi=72 #ffffffff at (36.0, 474.0)
    loop w=2 #ffffffff (10.0, 460.0) (26.0, 460.0) (26.0, 444.0) (10.0, 444.0)
    text "Wireframe" size=16 dpi=72 #ffffffff at (36.0, 444.0)
    "#);
}

#[test]
fn every_widget_is_offered_the_event() {
    let mut panel = Panel::new();
    // overlapping glyph boxes
    let (a, b) = with_viewport(VP, || {
        (
            panel.add(checkbox(10.0, 10.0, "A")),
            panel.add(checkbox(14.0, 12.0, "B")),
        )
    });
    let ca = count_changes(&mut panel, a);
    let cb = count_changes(&mut panel, b);

    with_viewport(VP, || assert!(panel.mouse_up(20.0, 480.0)));
    assert_eq!((ca.get(), cb.get()), (1, 1));

    // only A's box
    with_viewport(VP, || assert!(panel.mouse_up(11.0, 489.0)));
    assert_eq!((ca.get(), cb.get()), (2, 1));
    assert!(!panel.get::<Checkbox>(a).unwrap().is_checked());
    assert!(panel.get::<Checkbox>(b).unwrap().is_checked());
}

#[test]
fn miss_is_not_consumed() {
    let mut panel = Panel::new();
    let id = with_viewport(VP, || panel.add(checkbox(10.0, 10.0, "A")));
    let calls = count_changes(&mut panel, id);
    with_viewport(VP, || {
        assert!(!panel.mouse_down(400.0, 100.0));
        assert!(!panel.mouse_up(400.0, 100.0));
    });
    assert_eq!(calls.get(), 0);
}

#[test]
fn press_inside_is_consumed_without_toggle() {
    let mut panel = Panel::new();
    let id = with_viewport(VP, || panel.add(checkbox(10.0, 10.0, "A")));
    with_viewport(VP, || assert!(panel.handle_event(&PointerEvent::primary_down(15.0, 485.0))));
    assert!(!panel.get::<Checkbox>(id).unwrap().is_checked());
}

#[test]
fn failing_listener_does_not_break_dispatch() {
    let mut panel = Panel::new();
    let (bad, good) = with_viewport(VP, || {
        (
            panel.add(checkbox(10.0, 10.0, "bad")),
            panel.add(checkbox(10.0, 10.0, "good")),
        )
    });
    panel
        .get_mut::<Checkbox>(bad)
        .unwrap()
        .set_state_changed(|_| Err(anyhow::anyhow!("listener failed")));
    let good_calls = count_changes(&mut panel, good);

    let consumed = with_viewport(VP, || panel.mouse_up(15.0, 485.0));
    assert!(consumed);
    assert!(panel.get::<Checkbox>(bad).unwrap().is_checked());
    assert_eq!(good_calls.get(), 1);
}

#[test]
fn resize_relayout_moves_geometry() {
    let mut panel = Panel::new();
    let id = with_viewport(VP, || panel.add(checkbox(10.0, 10.0, "A")));

    let taller = Viewport {
        width: 800.0,
        height: 700.0,
    };
    with_viewport(taller, || {
        panel.layout();
        assert!(panel.mouse_up(15.0, 685.0));
    });
    let cb = panel.get::<Checkbox>(id).unwrap();
    assert_eq!(cb.outline_vertices().unwrap()[0].y, 690.0);
    assert!(cb.is_checked());
}

#[test]
fn scaled_layout() {
    let mut panel = Panel::new();
    let id = with_viewport(VP, || panel.add(checkbox(10.0, 10.0, "A")));
    with_viewport(VP, || with_ui_scale(UiScale(1.5), || panel.layout()));
    let cb = panel.get::<Checkbox>(id).unwrap();
    assert_eq!(cb.base().screen_position().x, 15.0);
    assert_eq!(cb.outline_vertices().unwrap()[0].y, 485.0);
}

#[test]
fn translate_moves_all_widgets() {
    let mut panel = Panel::new();
    let (a, b) = with_viewport(VP, || {
        (
            panel.add(checkbox(10.0, 10.0, "A")),
            panel.add(checkbox(10.0, 40.0, "B")),
        )
    });
    with_viewport(VP, || panel.translate(5.0, 100.0));
    let pa = panel.get::<Checkbox>(a).unwrap().base().position();
    let pb = panel.get::<Checkbox>(b).unwrap().base().position();
    assert_eq!((pa.x, pa.y), (15.0, 110.0));
    assert_eq!((pb.x, pb.y), (15.0, 140.0));
}

#[test]
fn remove_and_typed_lookup() {
    let mut panel = Panel::new();
    let id = with_viewport(VP, || panel.add(checkbox(10.0, 10.0, "A")));
    assert_eq!(panel.len(), 1);
    assert_eq!(panel.ids().collect::<Vec<_>>(), vec![id]);

    let removed = panel.remove(id).unwrap();
    assert_eq!(removed.base().position().x, 10.0);
    assert!(panel.is_empty());
    assert!(panel.get::<Checkbox>(id).is_none());
    assert!(panel.remove(id).is_none());
    assert!(render(&panel).is_empty());
}
