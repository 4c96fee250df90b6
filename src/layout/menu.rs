//! Context menus for the schedule grid.
//!
//! Administrator shifts, assistant shifts and empty cells share one
//! [`ContextMenu`] type; the [`MenuKind`] decides which items are offered,
//! which identifiers were captured when the menu opened and how focus is
//! handled after an action.
//!
//! A menu is either open (a value held in the page's [`MenuSlot`]) or closed
//! (no value at all). [`ContextMenu::activate`] consumes the menu, so an
//! action can fire at most once per opening.

use chrono::NaiveTime;
use serde::Serialize;

use crate::models::shift::{AdministratorId, AssistantId, StaffId};

/// Callbacks the scheduling page receives from menus.
pub trait MenuActions {
    fn on_edit(&mut self, staff: StaffId);
    fn on_delete_administrator(&mut self, id: AdministratorId);
    fn on_delete_assistant(&mut self, id: AssistantId);
    fn on_add_shift(&mut self, day_idx: usize, cabinet_idx: usize, time: NaiveTime);
    fn on_close(&mut self);
}

/// What currently holds keyboard focus on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedElement {
    TextInput,
    TextArea,
    Select,
    Other,
}

impl FocusedElement {
    pub fn is_form_field(&self) -> bool {
        matches!(
            self,
            FocusedElement::TextInput | FocusedElement::TextArea | FocusedElement::Select
        )
    }
}

pub trait FocusControl {
    fn focused(&self) -> Option<FocusedElement>;
    fn blur(&mut self);
}

/// Focus control for contexts with nothing focusable.
#[derive(Debug, Default)]
pub struct NoFocus;

impl FocusControl for NoFocus {
    fn focused(&self) -> Option<FocusedElement> {
        None
    }

    fn blur(&mut self) {}
}

/// How a menu treats the focused element after an action fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DefocusPolicy {
    /// Blur whatever is focused.
    Always,
    /// Blur unless a text input, textarea or select is being edited.
    SkipFormFields,
}

impl DefocusPolicy {
    /// Returns true when `blur` was called.
    pub fn apply(&self, focus: &mut dyn FocusControl) -> bool {
        let Some(focused) = focus.focused() else {
            return false;
        };
        if *self == DefocusPolicy::SkipFormFields && focused.is_form_field() {
            return false;
        }
        focus.blur();
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MenuItem {
    Edit,
    Delete,
    AddShift,
}

impl MenuItem {
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Edit => "✏ Edit",
            MenuItem::Delete => "🗑 Delete",
            MenuItem::AddShift => "➕ Add shift",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Enter,
    Space,
    Escape,
    Other,
}

/// Raw interaction with a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    PointerDown(PointerButton),
    Click(PointerButton),
    Key(MenuKey),
}

impl MenuInput {
    /// Primary pointer press/click, Enter or Space.
    pub fn is_activation(&self) -> bool {
        matches!(
            self,
            MenuInput::PointerDown(PointerButton::Primary)
                | MenuInput::Click(PointerButton::Primary)
                | MenuInput::Key(MenuKey::Enter)
                | MenuInput::Key(MenuKey::Space)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AccessRole {
    Menu,
    MenuItem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItemSpec {
    pub item: MenuItem,
    pub label: &'static str,
    pub role: AccessRole,
    pub tab_index: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuCapabilities {
    pub primary: MenuItem,
    pub secondary: Option<MenuItem>,
}

impl MenuCapabilities {
    pub fn offers(&self, item: MenuItem) -> bool {
        self.primary == item || self.secondary == Some(item)
    }

    pub fn items(&self) -> impl Iterator<Item = MenuItem> {
        std::iter::once(self.primary).chain(self.secondary)
    }
}

/// Screen position where the menu was opened.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
}

impl Anchor {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Shift the anchor so a menu of `menu_size` stays inside `viewport`.
    pub fn clamped(&self, menu_size: (f32, f32), viewport: (f32, f32)) -> Anchor {
        let max_x = (viewport.0 - menu_size.0).max(0.0);
        let max_y = (viewport.1 - menu_size.1).max(0.0);
        Anchor {
            x: self.x.clamp(0.0, max_x),
            y: self.y.clamp(0.0, max_y),
        }
    }
}

/// Identifiers captured when the menu was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MenuKind {
    Administrator {
        administrator_id: AdministratorId,
    },
    Assistant {
        assistant_id: AssistantId,
    },
    EmptyCell {
        day_idx: usize,
        cabinet_idx: usize,
        time: NaiveTime,
    },
}

impl MenuKind {
    pub fn capabilities(&self) -> MenuCapabilities {
        match self {
            MenuKind::Administrator { .. } | MenuKind::Assistant { .. } => MenuCapabilities {
                primary: MenuItem::Edit,
                secondary: Some(MenuItem::Delete),
            },
            MenuKind::EmptyCell { .. } => MenuCapabilities {
                primary: MenuItem::AddShift,
                secondary: None,
            },
        }
    }

    pub fn defocus_policy(&self) -> DefocusPolicy {
        match self {
            MenuKind::Assistant { .. } => DefocusPolicy::SkipFormFields,
            MenuKind::Administrator { .. } | MenuKind::EmptyCell { .. } => DefocusPolicy::Always,
        }
    }
}

/// Request produced by an activated menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MenuAction {
    Edit(StaffId),
    DeleteAdministrator(AdministratorId),
    DeleteAssistant(AssistantId),
    AddShift {
        day_idx: usize,
        cabinet_idx: usize,
        time: NaiveTime,
    },
}

impl MenuAction {
    pub fn dispatch(&self, actions: &mut dyn MenuActions) {
        match *self {
            MenuAction::Edit(staff) => actions.on_edit(staff),
            MenuAction::DeleteAdministrator(id) => actions.on_delete_administrator(id),
            MenuAction::DeleteAssistant(id) => actions.on_delete_assistant(id),
            MenuAction::AddShift {
                day_idx,
                cabinet_idx,
                time,
            } => actions.on_add_shift(day_idx, cabinet_idx, time),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MenuTransition {
    /// Input did not activate anything; the menu stays open.
    Open(ContextMenu),
    /// An action fired and the menu closed.
    Closed(MenuAction),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextMenu {
    pub anchor: Anchor,
    pub kind: MenuKind,
}

impl ContextMenu {
    pub fn administrator(anchor: Anchor, administrator_id: AdministratorId) -> Self {
        Self {
            anchor,
            kind: MenuKind::Administrator { administrator_id },
        }
    }

    pub fn assistant(anchor: Anchor, assistant_id: AssistantId) -> Self {
        Self {
            anchor,
            kind: MenuKind::Assistant { assistant_id },
        }
    }

    pub fn empty_cell(anchor: Anchor, day_idx: usize, cabinet_idx: usize, time: NaiveTime) -> Self {
        Self {
            anchor,
            kind: MenuKind::EmptyCell {
                day_idx,
                cabinet_idx,
                time,
            },
        }
    }

    /// Menu for a shift block owned by `staff`.
    pub fn for_staff(anchor: Anchor, staff: StaffId) -> Self {
        match staff {
            StaffId::Administrator(id) => Self::administrator(anchor, id),
            StaffId::Assistant(id) => Self::assistant(anchor, id),
        }
    }

    pub fn role(&self) -> AccessRole {
        AccessRole::Menu
    }

    pub fn title(&self) -> String {
        match self.kind {
            MenuKind::Administrator { administrator_id } => {
                format!("Administrator #{}", administrator_id.0)
            }
            MenuKind::Assistant { assistant_id } => format!("Assistant #{}", assistant_id.0),
            MenuKind::EmptyCell { time, .. } => format!("Free slot {}", time.format("%H:%M")),
        }
    }

    pub fn items(&self) -> Vec<MenuItemSpec> {
        self.kind
            .capabilities()
            .items()
            .map(|item| MenuItemSpec {
                item,
                label: item.label(),
                role: AccessRole::MenuItem,
                tab_index: 0,
            })
            .collect()
    }

    /// The request `item` would produce, if this menu offers it.
    pub fn action_for(&self, item: MenuItem) -> Option<MenuAction> {
        if !self.kind.capabilities().offers(item) {
            return None;
        }
        let action = match (self.kind, item) {
            (MenuKind::Administrator { administrator_id }, MenuItem::Edit) => {
                MenuAction::Edit(StaffId::Administrator(administrator_id))
            }
            (MenuKind::Administrator { administrator_id }, MenuItem::Delete) => {
                MenuAction::DeleteAdministrator(administrator_id)
            }
            (MenuKind::Assistant { assistant_id }, MenuItem::Edit) => {
                MenuAction::Edit(StaffId::Assistant(assistant_id))
            }
            (MenuKind::Assistant { assistant_id }, MenuItem::Delete) => {
                MenuAction::DeleteAssistant(assistant_id)
            }
            (
                MenuKind::EmptyCell {
                    day_idx,
                    cabinet_idx,
                    time,
                },
                MenuItem::AddShift,
            ) => MenuAction::AddShift {
                day_idx,
                cabinet_idx,
                time,
            },
            _ => return None,
        };
        Some(action)
    }

    /// Feed one interaction on `item` into the menu.
    ///
    /// On activation the bound callback fires, focus is released according to
    /// the menu's [`DefocusPolicy`], and `on_close` fires last.
    pub fn activate(
        self,
        item: MenuItem,
        input: MenuInput,
        actions: &mut dyn MenuActions,
        focus: &mut dyn FocusControl,
    ) -> MenuTransition {
        if !input.is_activation() {
            return MenuTransition::Open(self);
        }
        let Some(action) = self.action_for(item) else {
            return MenuTransition::Open(self);
        };

        log::debug!("Context menu {:?} activated {:?} via {:?}", self.kind, item, input);
        action.dispatch(actions);
        self.kind.defocus_policy().apply(focus);
        actions.on_close();

        MenuTransition::Closed(action)
    }

    /// Close without an action (click elsewhere, Escape, another menu opening).
    pub fn dismiss(self, actions: &mut dyn MenuActions) {
        log::debug!("Context menu {:?} dismissed", self.kind);
        actions.on_close();
    }
}

/// The page's single menu-state slot.
#[derive(Debug, Default)]
pub struct MenuSlot {
    menu: Option<ContextMenu>,
}

impl MenuSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.menu.is_some()
    }

    pub fn current(&self) -> Option<&ContextMenu> {
        self.menu.as_ref()
    }

    /// Open `menu`, dismissing any menu that was already open.
    pub fn open(&mut self, menu: ContextMenu, actions: &mut dyn MenuActions) {
        if let Some(previous) = self.menu.take() {
            previous.dismiss(actions);
        }
        log::debug!("Opening context menu {:?} at {:?}", menu.kind, menu.anchor);
        self.menu = Some(menu);
    }

    /// Route an interaction to the open menu. Returns the fired action, if any.
    pub fn handle(
        &mut self,
        item: MenuItem,
        input: MenuInput,
        actions: &mut dyn MenuActions,
        focus: &mut dyn FocusControl,
    ) -> Option<MenuAction> {
        let menu = self.menu.take()?;
        match menu.activate(item, input, actions, focus) {
            MenuTransition::Open(menu) => {
                self.menu = Some(menu);
                None
            }
            MenuTransition::Closed(action) => Some(action),
        }
    }

    /// External close request. Returns false if nothing was open.
    pub fn dismiss(&mut self, actions: &mut dyn MenuActions) -> bool {
        match self.menu.take() {
            Some(menu) => {
                menu.dismiss(actions);
                true
            }
            None => false,
        }
    }
}
