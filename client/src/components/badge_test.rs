use super::*;

#[test]
fn healthy_statuses_are_success() {
    for status in ["Online", "active", "PAID"] {
        assert_eq!(BadgeTone::for_status(status), BadgeTone::Success, "{status}");
    }
}

#[test]
fn attention_statuses_are_warning() {
    for status in ["Maintenance", "Trial", "Due", "Warning"] {
        assert_eq!(BadgeTone::for_status(status), BadgeTone::Warning, "{status}");
    }
}

#[test]
fn failing_statuses_are_danger() {
    for status in ["Offline", "Suspended", "Overdue", "Critical"] {
        assert_eq!(BadgeTone::for_status(status), BadgeTone::Danger, "{status}");
    }
}

#[test]
fn unknown_status_is_neutral() {
    assert_eq!(BadgeTone::for_status("Utility"), BadgeTone::Neutral);
    assert_eq!(BadgeTone::for_status(""), BadgeTone::Neutral);
}

#[test]
fn status_matching_ignores_padding() {
    assert_eq!(BadgeTone::for_status("  info "), BadgeTone::Info);
}

#[test]
fn every_tone_has_modifier_class() {
    for tone in [BadgeTone::Success, BadgeTone::Warning, BadgeTone::Danger, BadgeTone::Info, BadgeTone::Neutral] {
        assert!(tone.class().starts_with("badge badge--"));
    }
}
