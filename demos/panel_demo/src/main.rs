//! Drives a small checkbox panel without a window: lays it out, records a
//! few frames, clicks on it and resizes the viewport.
//!
//! `RUST_LOG=debug cargo run -p panel_demo -- prefs.json`

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use overlay_core::prelude::*;
use overlay_text::CosmicMeasure;
use overlay_ui::{Checkbox, DrawContext, Panel, WidgetId};

/// Interface scale reported by the (imaginary) host.
const HOST_UI_SCALE: f32 = 1.0;

struct LogBackend {
    frames: u64,
}

impl RenderBackend for LogBackend {
    fn configure_surface(&mut self, width: u32, height: u32) {
        log::info!("surface {width}x{height}");
    }

    fn frame(&mut self, scene: &Scene) {
        self.frames += 1;
        let batches = scene
            .nodes
            .iter()
            .filter(|n| matches!(n, SceneNode::Batch { .. }))
            .count();
        log::info!(
            "frame {}: {batches} batches, {} text runs",
            self.frames,
            scene.nodes.len() - batches
        );
    }
}

struct Host {
    viewport: Viewport,
    prefs: Preferences,
    backend: LogBackend,
    text: CosmicMeasure,
}

impl Host {
    fn scale(&self) -> UiScale {
        self.prefs.effective_scale(HOST_UI_SCALE)
    }

    fn within<R>(&self, f: impl FnOnce() -> R) -> R {
        with_viewport(self.viewport, || with_ui_scale(self.scale(), f))
    }

    fn redraw(&mut self, panel: &Panel) {
        let mut scene = Scene::new();
        let (viewport, scale) = (self.viewport, self.scale());
        let text = &mut self.text;
        with_viewport(viewport, || {
            with_ui_scale(scale, || {
                panel.draw(&mut DrawContext::new(&mut scene, text));
            })
        });
        self.backend.frame(&scene);
    }

    fn resize(&mut self, panel: &mut Panel, width: f32, height: f32) {
        let old = self.viewport;
        self.viewport = Viewport { width, height };
        self.backend.configure_surface(width as u32, height as u32);
        if let Some(pos) = self.prefs.last_position {
            let moved = self.prefs.slide(pos, old.height, height);
            // slide works in whole screen pixels, translate in logical ones
            let scale = self.scale().0;
            let dx = (moved.x - pos.x) as f32 / scale;
            let dy = (moved.y - pos.y) as f32 / scale;
            self.prefs.last_position = Some(moved);
            self.within(|| panel.translate(dx, dy));
        }
        self.within(|| panel.layout());
    }
}

fn build_panel(
    host: &Host,
    origin: PanelPosition,
    log: Rc<RefCell<Vec<String>>>,
) -> (Panel, Vec<WidgetId>) {
    let mut panel = Panel::new();
    let labels = ["Show grid", "Wireframe", "X-ray"];
    let ids = host.within(|| {
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let x = origin.x as f32 + 10.0;
                let y = origin.y as f32 + 10.0 + i as f32 * 24.0;
                let mut cb = Checkbox::new(x, y, 160.0, 20.0);
                cb.set_text(*label);
                let log = log.clone();
                cb.set_state_changed(move |cb| {
                    log.borrow_mut()
                        .push(format!("{} -> {}", cb.text(), cb.is_checked()));
                    Ok(())
                });
                panel.add(cb)
            })
            .collect()
    });
    (panel, ids)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("overlay_panel_prefs.json"));
    let mut prefs = Preferences::load(&path)?;
    prefs.panel_size = PanelSize {
        width: 180.0,
        height: 90.0,
    };

    let mut host = Host {
        viewport: Viewport {
            width: 1280.0,
            height: 720.0,
        },
        prefs,
        backend: LogBackend { frames: 0 },
        text: CosmicMeasure,
    };
    host.backend
        .configure_surface(host.viewport.width as u32, host.viewport.height as u32);

    let origin = match host.prefs.initial_position(None) {
        Some(pos) => pos,
        None => host
            .prefs
            .reset_position(Some(host.viewport.width), HOST_UI_SCALE),
    };
    log::info!("panel opens at {origin:?}");

    let changes = Rc::new(RefCell::new(Vec::new()));
    let (mut panel, ids) = build_panel(&host, origin, changes.clone());
    host.redraw(&panel);

    // Click the first two boxes (press + release), then miss everything.
    for id in ids.iter().take(2) {
        let Some(cb) = panel.get::<Checkbox>(*id) else {
            continue;
        };
        let hit = cb.outline_vertices().map(|v| Vec2::new(v[0].x + 8.0, v[0].y - 8.0));
        if let Some(p) = hit {
            host.within(|| {
                panel.mouse_down(p.x, p.y);
                panel.mouse_up(p.x, p.y);
            });
        }
    }
    let consumed = host.within(|| panel.mouse_up(5.0, 5.0));
    log::info!("click on empty viewport consumed={consumed}");
    host.redraw(&panel);

    host.resize(&mut panel, 1280.0, 900.0);
    host.redraw(&panel);

    for line in changes.borrow().iter() {
        println!("{line}");
    }

    host.prefs.save(&path)?;
    println!("preferences saved to {}", path.display());
    Ok(())
}
