//! Floating context menu for the schedule grid.
//!
//! Renders whatever menu the page's [`MenuSlot`] holds at its anchor and feeds
//! pointer and keyboard input on each item back into the slot.

use egui::{Id, Key, Order, Pos2, Response};

use crate::layout::menu::{
    FocusControl, FocusedElement, MenuAction, MenuActions, MenuInput, MenuItem, MenuKey,
    MenuSlot, PointerButton,
};

const MENU_WIDTH: f32 = 170.0;
const MENU_HEIGHT_ESTIMATE: f32 = 96.0;

/// Focus of the egui context as seen by the menus.
///
/// egui does not tell single-line and multi-line text edits apart, so any
/// focused text edit is reported as a text input.
pub struct EguiFocus<'a> {
    ctx: &'a egui::Context,
}

impl<'a> EguiFocus<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

impl FocusControl for EguiFocus<'_> {
    fn focused(&self) -> Option<FocusedElement> {
        let id = self.ctx.memory(|mem| mem.focused())?;
        if egui::TextEdit::load_state(self.ctx, id).is_some() {
            Some(FocusedElement::TextInput)
        } else {
            Some(FocusedElement::Other)
        }
    }

    fn blur(&mut self) {
        if let Some(id) = self.ctx.memory(|mem| mem.focused()) {
            self.ctx.memory_mut(|mem| mem.surrender_focus(id));
        }
    }
}

/// Translate egui's view of an item button into a menu input.
fn read_item_input(ui: &egui::Ui, response: &Response) -> Option<MenuInput> {
    if response.has_focus() {
        let key = ui.input(|i| {
            if i.key_pressed(Key::Enter) {
                Some(MenuKey::Enter)
            } else if i.key_pressed(Key::Space) {
                Some(MenuKey::Space)
            } else {
                None
            }
        });
        if let Some(key) = key {
            return Some(MenuInput::Key(key));
        }
    }

    if response.is_pointer_button_down_on() && ui.input(|i| i.pointer.primary_pressed()) {
        return Some(MenuInput::PointerDown(PointerButton::Primary));
    }
    if response.clicked_by(egui::PointerButton::Primary) {
        return Some(MenuInput::Click(PointerButton::Primary));
    }
    if response.secondary_clicked() {
        return Some(MenuInput::Click(PointerButton::Secondary));
    }
    if response.middle_clicked() {
        return Some(MenuInput::Click(PointerButton::Middle));
    }
    None
}

/// Show the open menu, if any. Returns the action fired this frame.
pub fn render_context_menu(
    ctx: &egui::Context,
    slot: &mut MenuSlot,
    actions: &mut dyn MenuActions,
) -> Option<MenuAction> {
    let menu = slot.current()?.clone();

    if ctx.input(|i| i.key_pressed(Key::Escape)) {
        slot.dismiss(actions);
        return None;
    }

    let screen = ctx.screen_rect();
    let anchor = menu
        .anchor
        .clamped((MENU_WIDTH, MENU_HEIGHT_ESTIMATE), (screen.width(), screen.height()));

    let mut fired: Option<(MenuItem, MenuInput)> = None;
    let area = egui::Area::new(Id::new("schedule_context_menu"))
        .order(Order::Foreground)
        .fixed_pos(Pos2::new(anchor.x, anchor.y))
        .show(ctx, |ui| {
            egui::Frame::menu(ui.style()).show(ui, |ui| {
                ui.set_width(MENU_WIDTH);
                ui.label(egui::RichText::new(menu.title()).strong());
                ui.separator();

                for spec in menu.items() {
                    let response = ui.add(egui::Button::new(spec.label).min_size(egui::vec2(MENU_WIDTH, 0.0)));
                    if fired.is_none() {
                        if let Some(input) = read_item_input(ui, &response) {
                            fired = Some((spec.item, input));
                        }
                    }
                }
            });
        });

    if let Some((item, input)) = fired {
        let mut focus = EguiFocus::new(ctx);
        return slot.handle(item, input, actions, &mut focus);
    }

    // A primary press outside the menu is a close request.
    let pressed_outside = ctx.input(|i| {
        i.pointer.primary_pressed()
            && i
                .pointer
                .interact_pos()
                .map_or(false, |pos| !area.response.rect.contains(pos))
    });
    if pressed_outside {
        slot.dismiss(actions);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, Modifiers, RawInput, Rect};
    use test_case::test_case;

    /// Run one frame with a single "Edit" button and read its input.
    fn run_frame(ctx: &egui::Context, events: Vec<Event>, focus: bool) -> (Option<MenuInput>, Rect) {
        let raw = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, egui::vec2(800.0, 600.0))),
            events,
            ..Default::default()
        };
        let mut input = None;
        let mut rect = Rect::NOTHING;
        let _ = ctx.run(raw, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let response = ui.button("Edit");
                if focus {
                    response.request_focus();
                }
                input = read_item_input(ui, &response);
                rect = response.rect;
            });
        });
        (input, rect)
    }

    fn key_event(key: Key) -> Event {
        Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        }
    }

    fn pointer_event(pos: Pos2, button: egui::PointerButton, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    #[test_case(Key::Enter, MenuKey::Enter ; "enter")]
    #[test_case(Key::Space, MenuKey::Space ; "space")]
    fn test_key_on_focused_item_activates(key: Key, expected: MenuKey) {
        let ctx = egui::Context::default();
        let (idle, _) = run_frame(&ctx, Vec::new(), true);
        assert_eq!(idle, None);

        let (input, _) = run_frame(&ctx, vec![key_event(key)], false);
        assert_eq!(input, Some(MenuInput::Key(expected)));
        assert!(input.is_some_and(|input| input.is_activation()));
    }

    #[test]
    fn test_key_without_focus_is_ignored() {
        let ctx = egui::Context::default();
        let _ = run_frame(&ctx, Vec::new(), false);
        let (input, _) = run_frame(&ctx, vec![key_event(Key::Enter)], false);
        assert_eq!(input, None);
    }

    #[test]
    fn test_primary_press_is_pointer_down() {
        let ctx = egui::Context::default();
        let (_, rect) = run_frame(&ctx, Vec::new(), false);
        let pos = rect.center();

        let _ = run_frame(&ctx, vec![Event::PointerMoved(pos)], false);
        let (input, _) = run_frame(
            &ctx,
            vec![pointer_event(pos, egui::PointerButton::Primary, true)],
            false,
        );
        assert_eq!(input, Some(MenuInput::PointerDown(PointerButton::Primary)));
    }

    #[test]
    fn test_secondary_click_is_inert() {
        let ctx = egui::Context::default();
        let (_, rect) = run_frame(&ctx, Vec::new(), false);
        let pos = rect.center();

        let _ = run_frame(&ctx, vec![Event::PointerMoved(pos)], false);
        let (pressed, _) = run_frame(
            &ctx,
            vec![pointer_event(pos, egui::PointerButton::Secondary, true)],
            false,
        );
        assert_eq!(pressed, None);

        let (released, _) = run_frame(
            &ctx,
            vec![pointer_event(pos, egui::PointerButton::Secondary, false)],
            false,
        );
        assert_eq!(released, Some(MenuInput::Click(PointerButton::Secondary)));
        assert!(released.is_some_and(|input| !input.is_activation()));
    }

    #[test]
    fn test_nothing_focused_in_fresh_context() {
        let ctx = egui::Context::default();
        let focus = EguiFocus::new(&ctx);
        assert_eq!(focus.focused(), None);
    }

    #[test]
    fn test_blur_without_focus_is_harmless() {
        let ctx = egui::Context::default();
        let mut focus = EguiFocus::new(&ctx);
        focus.blur();
        assert_eq!(focus.focused(), None);
    }
}
