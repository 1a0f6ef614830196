use geomath_core::view::Action;
use tracing::debug;

use crate::app::GeomathApp;

/// What a key press asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    Act(Action),
    /// Open the exit confirmation.
    Exit,
}

pub fn shortcut_for(key: egui::Key) -> Option<Shortcut> {
    let shortcut = match key {
        // '+' arrives as Equals on layouts where it needs Shift
        egui::Key::Plus | egui::Key::Equals => Shortcut::Act(Action::ZoomIn),
        egui::Key::Minus => Shortcut::Act(Action::ZoomOut),
        egui::Key::ArrowLeft => Shortcut::Act(Action::RotateLeft),
        egui::Key::ArrowRight => Shortcut::Act(Action::RotateRight),
        egui::Key::Space => Shortcut::Act(Action::HalfTurn),
        egui::Key::M => Shortcut::Act(Action::QuarterTurn),
        egui::Key::Escape => Shortcut::Exit,
        _ => return None,
    };
    Some(shortcut)
}

/// Apply this frame's key presses. While the exit confirmation is open only
/// Escape is handled, and it dismisses the dialog.
pub fn handle(ctx: &egui::Context, app: &mut GeomathApp) {
    let keys: Vec<egui::Key> = ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key, pressed: true, ..
                } => Some(*key),
                _ => None,
            })
            .collect()
    });

    for key in keys {
        match shortcut_for(key) {
            Some(Shortcut::Exit) => app.show_exit_confirm = !app.show_exit_confirm,
            Some(Shortcut::Act(action)) if !app.show_exit_confirm => {
                let changed = app.overlay.apply(action);
                debug!(?key, ?action, changed, "shortcut");
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_documented_keys() {
        assert_eq!(shortcut_for(egui::Key::Plus), Some(Shortcut::Act(Action::ZoomIn)));
        assert_eq!(shortcut_for(egui::Key::Minus), Some(Shortcut::Act(Action::ZoomOut)));
        assert_eq!(
            shortcut_for(egui::Key::ArrowLeft),
            Some(Shortcut::Act(Action::RotateLeft))
        );
        assert_eq!(
            shortcut_for(egui::Key::ArrowRight),
            Some(Shortcut::Act(Action::RotateRight))
        );
        assert_eq!(shortcut_for(egui::Key::Space), Some(Shortcut::Act(Action::HalfTurn)));
        assert_eq!(shortcut_for(egui::Key::M), Some(Shortcut::Act(Action::QuarterTurn)));
        assert_eq!(shortcut_for(egui::Key::Escape), Some(Shortcut::Exit));
    }

    #[test]
    fn ignores_other_keys() {
        assert_eq!(shortcut_for(egui::Key::A), None);
        assert_eq!(shortcut_for(egui::Key::Enter), None);
    }
}
