//! Hover navigation menu
//!
//! A trigger label that reveals a floating panel of thumbnailed product links.
//! Open/close timing lives in [`crate::hover`]; this module only renders.

use std::time::Duration;

use leptos::prelude::*;

use super::{Badge, BadgeVariant, ICON_CARET_RIGHT, Icon};
use crate::hover::{DEFAULT_CLOSE_DELAY, HoverController};
use crate::scheduler::{BrowserScheduler, Scheduler};
use crate::types::{DropdownItem, default_footer_label};

/// One rendered panel row, with the image reference already resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelEntry {
    pub key: String,
    pub name: String,
    pub code: String,
    pub image: String,
    pub badge: Option<String>,
}

impl From<&DropdownItem> for PanelEntry {
    fn from(item: &DropdownItem) -> Self {
        Self {
            key: item.id.clone(),
            name: item.name.clone(),
            code: item.code.clone(),
            image: item.image_src().to_string(),
            badge: item.badge.clone(),
        }
    }
}

/// Rows for a panel, in caller order.
pub fn panel_entries(items: &[DropdownItem]) -> Vec<PanelEntry> {
    items.iter().map(PanelEntry::from).collect()
}

/// Value of the menu root's `data-state` attribute.
pub fn state_attr(open: bool) -> &'static str {
    if open { "open" } else { "closed" }
}

/// Hover controller owned by the current reactive owner.
///
/// Returns the visibility signal and the stored controller. Cleaning up the
/// owner unmounts the controller, which cancels a pending close.
pub fn use_hover_menu<S>(
    scheduler: S,
    close_delay: Duration,
) -> (ReadSignal<bool>, StoredValue<HoverController<S>, LocalStorage>)
where
    S: Scheduler + Clone + 'static,
    S::Handle: 'static,
{
    let (is_open, set_is_open) = signal(false);

    let controller = StoredValue::new_local(HoverController::new(
        scheduler,
        close_delay,
        move |open| set_is_open.set(open),
    ));
    on_cleanup(move || {
        controller.try_with_value(|menu| menu.unmount());
    });

    (is_open, controller)
}

/// Navigation entry that opens on hover.
///
/// The pointer handlers sit on the root element, which contains both the
/// trigger and the panel, so moving between the two only produces a
/// leave/enter pair when the pointer crosses the gap between them. The close
/// delay absorbs that crossing.
#[component]
pub fn NavDropdown(
    #[prop(into)] trigger: String,
    items: Vec<DropdownItem>,
    #[prop(into, default = default_footer_label())] footer_label: String,
    #[prop(default = DEFAULT_CLOSE_DELAY)] close_delay: Duration,
) -> impl IntoView {
    let (is_open, controller) = use_hover_menu(BrowserScheduler, close_delay);
    let entries = panel_entries(&items);

    view! {
        <div
            class="nav-dropdown"
            data-state=move || state_attr(is_open.get())
            on:pointerenter=move |_| controller.with_value(|menu| menu.pointer_enter())
            on:pointerleave=move |_| controller.with_value(|menu| menu.pointer_leave())
        >
            <a
                href="#"
                class="nav-link nav-dropdown-trigger"
                aria-haspopup="true"
                aria-expanded=move || is_open.get().to_string()
            >
                {trigger}
            </a>

            <Show when=move || is_open.get()>
                <div class="dropdown-panel">
                    <div class="dropdown-items">
                        {entries
                            .iter()
                            .cloned()
                            .map(|entry| view! { <DropdownRow entry=entry /> })
                            .collect::<Vec<_>>()}
                    </div>
                    <a href="#" class="dropdown-footer">
                        <span>{footer_label.clone()}</span>
                        <Icon path=ICON_CARET_RIGHT size="16" class="dropdown-footer-caret" />
                    </a>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn DropdownRow(entry: PanelEntry) -> impl IntoView {
    let alt = entry.name.clone();
    view! {
        <a href="#" class="dropdown-item" data-item=entry.key>
            <div class="dropdown-thumb">
                <img src=entry.image alt=alt />
            </div>
            <div class="dropdown-meta">
                <div class="dropdown-meta-line">
                    <span class="dropdown-code">{entry.code}</span>
                    {entry.badge.map(|badge| view! { <Badge label=badge variant=BadgeVariant::Promo /> })}
                </div>
                <p class="dropdown-name">{entry.name}</p>
            </div>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hover::HoverPhase;
    use crate::scheduler::ManualScheduler;
    use crate::types::PLACEHOLDER_IMAGE;
    use pretty_assertions::assert_eq;

    fn item(id: &str, name: &str, code: &str, image: &str, badge: Option<&str>) -> DropdownItem {
        DropdownItem {
            id: id.into(),
            name: name.into(),
            code: code.into(),
            image: image.into(),
            badge: badge.map(Into::into),
        }
    }

    fn seven_items() -> Vec<DropdownItem> {
        vec![
            item("pm-02", "Sleep + Restore", "PM-02®", "/img/pm-02.jpg", Some("New")),
            item("ds-01", "Daily Synbiotic", "DS-01®", "/img/ds-01.jpg", Some("Bestseller")),
            item("vs-01", "Vaginal Synbiotic", "VS-01®", "/img/vs-01.jpg", None),
            item("dm-02", "Daily Multivitamin", "DM-02®", "", Some("New")),
            item("am-02", "Energy + Focus", "AM-02®", "/img/am-02.jpg", None),
            item("pds-08", "Pediatric Daily Synbiotic", "PDS-08®", "/img/pds-08.jpg", None),
            item("kit", "Starter Kit", "DS-01® + DM-02®", "/img/kit.jpg", Some("Save 25%")),
        ]
    }

    #[test]
    fn entries_keep_caller_order() {
        let items = seven_items();
        let keys: Vec<_> = panel_entries(&items).into_iter().map(|e| e.key).collect();
        assert_eq!(
            keys,
            vec!["pm-02", "ds-01", "vs-01", "dm-02", "am-02", "pds-08", "kit"]
        );
    }

    #[test]
    fn entries_carry_every_field() {
        let items = seven_items();
        let entries = panel_entries(&items);

        assert_eq!(entries.len(), 7);
        for (item, entry) in items.iter().zip(&entries) {
            assert_eq!(entry.name, item.name);
            assert_eq!(entry.code, item.code);
            assert_eq!(entry.badge, item.badge);
            assert_eq!(entry.badge.is_some(), item.badge.is_some());
            if item.image.is_empty() {
                assert_eq!(entry.image, PLACEHOLDER_IMAGE);
            } else {
                assert_eq!(entry.image, item.image);
            }
        }
    }

    #[test]
    fn missing_image_gets_placeholder() {
        let items = seven_items();
        let entries = panel_entries(&items);
        assert_eq!(
            entries[3],
            PanelEntry {
                key: "dm-02".into(),
                name: "Daily Multivitamin".into(),
                code: "DM-02®".into(),
                image: PLACEHOLDER_IMAGE.into(),
                badge: Some("New".into()),
            }
        );
    }

    #[test]
    fn empty_menu_has_no_rows() {
        assert!(panel_entries(&[]).is_empty());
    }

    #[test]
    fn state_attr_values() {
        assert_eq!(state_attr(true), "open");
        assert_eq!(state_attr(false), "closed");
    }

    #[test]
    fn hook_tracks_visibility() {
        let clock = ManualScheduler::new();
        let owner = Owner::new();
        owner.with(|| {
            let (is_open, menu) = use_hover_menu(clock.clone(), Duration::from_millis(100));

            menu.with_value(|m| m.pointer_enter());
            assert!(is_open.get_untracked());

            menu.with_value(|m| m.pointer_leave());
            clock.advance(Duration::from_millis(100));
            assert!(!is_open.get_untracked());
        });
    }

    #[test]
    fn owner_cleanup_cancels_pending_close() {
        let clock = ManualScheduler::new();
        let owner = Owner::new();
        let (_, menu) =
            owner.with(|| use_hover_menu(clock.clone(), Duration::from_millis(100)));

        owner.with(|| {
            menu.with_value(|m| m.pointer_enter());
            menu.with_value(|m| m.pointer_leave());
        });
        assert_eq!(clock.pending(), 1);
        let phase = menu.with_value(|m| m.phase());
        assert!(matches!(phase, HoverPhase::Closing(_)));

        owner.cleanup();
        assert_eq!(clock.pending(), 0);
        assert_eq!(clock.cancelled_total(), 1);

        clock.advance(Duration::from_millis(250));
        assert_eq!(clock.fired_total(), 0);
    }
}
