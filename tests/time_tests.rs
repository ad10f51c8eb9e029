//! Integration tests for the time model

mod common;
use common::*;

use binclock::{Meridiem, TimeCounters, TimeError, TimeOfDay};

fn every_time() -> impl Iterator<Item = TimeOfDay> {
    [Meridiem::Am, Meridiem::Pm].into_iter().flat_map(|meridiem| {
        (1..=12u8).flat_map(move |hour| (0..60u8).map(move |minute| time(hour, minute, meridiem)))
    })
}

#[test]
fn normalize_is_idempotent_for_every_time() {
    for t in every_time() {
        assert_eq!(t.normalize(), t);
        assert_eq!(t.normalize().normalize(), t.normalize());
    }
}

#[test]
fn normalize_is_idempotent_after_raw_overflow() {
    for minute in 0..=200u8 {
        let once = TimeCounters::new(12, minute, Meridiem::Am).normalize();
        assert_eq!(once.normalize(), once, "minute counter {}", minute);
        assert!((1..=12).contains(&once.hour()));
        assert!(once.minute() < 60);
    }
}

#[test]
fn twelve_sixty_pm_normalizes_to_one_am() {
    assert_eq!(
        TimeCounters::new(12, 60, Meridiem::Pm).normalize(),
        time(1, 0, Meridiem::Am)
    );
}

#[test]
fn twelve_sixty_one_am_flips_meridiem_exactly_once() {
    assert_eq!(
        TimeCounters::new(12, 61, Meridiem::Am).normalize(),
        time(1, 1, Meridiem::Pm)
    );
}

#[test]
fn several_minutes_before_normalize_still_flip_once() {
    // advance the raw counter several times, then normalize once
    let mut counters = time(12, 58, Meridiem::Pm).counters();
    for _ in 0..5 {
        counters.minute += 1;
    }
    assert_eq!(counters.normalize(), time(1, 3, Meridiem::Am));
}

#[test]
fn full_day_of_minutes_returns_to_start() {
    let start = time(7, 42, Meridiem::Am);
    let mut t = start;
    for _ in 0..(24 * 60) {
        t = t.advance_minute();
    }
    assert_eq!(t, start);
}

#[test]
fn twelve_hours_of_minutes_flips_meridiem() {
    let start = time(7, 42, Meridiem::Am);
    let mut t = start;
    for _ in 0..(12 * 60) {
        t = t.advance_minute();
    }
    assert_eq!(t, time(7, 42, Meridiem::Pm));
}

#[test]
fn minute_button_matches_advance_minute() {
    for t in every_time() {
        assert_eq!(t.increment_minute_by_one(), t.advance_minute());
    }
}

#[test]
fn hour_button_keeps_minute_and_wraps_at_twelve() {
    assert_eq!(
        time(11, 20, Meridiem::Am).increment_hour_by_one(),
        time(12, 20, Meridiem::Am)
    );
    assert_eq!(
        time(12, 20, Meridiem::Am).increment_hour_by_one(),
        time(1, 20, Meridiem::Pm)
    );
    assert_eq!(
        time(12, 20, Meridiem::Pm).increment_hour_by_one(),
        time(1, 20, Meridiem::Am)
    );
}

#[test]
fn new_validates_ranges() {
    assert_eq!(
        TimeOfDay::new(0, 0, Meridiem::Am),
        Err(TimeError::HourOutOfRange(0))
    );
    assert_eq!(
        TimeOfDay::new(12, 60, Meridiem::Pm),
        Err(TimeError::MinuteOutOfRange(60))
    );
    assert!(TimeOfDay::new(12, 59, Meridiem::Pm).is_ok());
}

#[test]
fn errors_have_readable_messages() {
    assert_eq!(
        format!("{}", TimeError::HourOutOfRange(13)),
        "hour 13 is outside 1..=12"
    );
    assert_eq!(
        format!("{}", TimeError::MinuteOutOfRange(75)),
        "minute 75 is outside 0..=59"
    );
}
