//! Several menus sharing one clock must not affect each other.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use storefront::SiteConfig;
use storefront::hover::{HoverController, HoverPhase};
use storefront::scheduler::ManualScheduler;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn menu(
    clock: &ManualScheduler,
    delay: Duration,
) -> (HoverController<ManualScheduler>, Rc<RefCell<Vec<bool>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let controller = HoverController::new(clock.clone(), delay, move |open| {
        sink.borrow_mut().push(open);
    });
    (controller, seen)
}

#[test]
fn sweeping_across_menus_hands_over_cleanly() {
    let clock = ManualScheduler::new();
    let (shop, shop_seen) = menu(&clock, ms(100));
    let (science, science_seen) = menu(&clock, ms(100));

    shop.pointer_enter();
    shop.pointer_leave();
    science.pointer_enter();

    // Both visible while shop's grace period runs.
    assert!(shop.is_open());
    assert!(science.is_open());

    clock.advance(ms(100));
    assert!(!shop.is_open());
    assert!(science.is_open());
    assert_eq!(*shop_seen.borrow(), vec![true, false]);
    assert_eq!(*science_seen.borrow(), vec![true]);
}

#[test]
fn unmounting_one_menu_leaves_the_other_running() {
    let clock = ManualScheduler::new();
    let (shop, _) = menu(&clock, ms(100));
    let (science, science_seen) = menu(&clock, ms(100));

    shop.pointer_enter();
    science.pointer_enter();
    shop.pointer_leave();
    science.pointer_leave();
    assert_eq!(clock.pending(), 2);

    shop.unmount();
    assert_eq!(clock.pending(), 1);

    clock.advance(ms(150));
    assert_eq!(shop.phase(), HoverPhase::Unmounted);
    assert_eq!(science.phase(), HoverPhase::Closed);
    assert_eq!(*science_seen.borrow(), vec![true, false]);
}

#[test]
fn configured_delay_drives_the_controller() {
    let config =
        SiteConfig::from_toml_str("[hover]\nclose_delay_ms = 40\n").expect("valid config");
    let clock = ManualScheduler::new();
    let (shop, _) = menu(&clock, config.hover.close_delay());

    shop.pointer_enter();
    shop.pointer_leave();
    clock.advance(ms(39));
    assert!(shop.is_open());
    clock.advance(ms(1));
    assert!(!shop.is_open());
}
