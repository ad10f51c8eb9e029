//! Integration tests for the binary display encoding

mod common;
use common::*;

use binclock::display::{hour_bits, minute_bits};
use binclock::{display_pattern, DisplayPattern, IndicatorLine, Meridiem};

#[test]
fn hour_nine_is_1001() {
    let pattern = display_pattern(&time(9, 0, Meridiem::Am));
    assert_eq!(pattern.hour_bits(), [true, false, false, true]);
}

#[test]
fn hour_twelve_is_1100() {
    let pattern = display_pattern(&time(12, 0, Meridiem::Pm));
    assert_eq!(pattern.hour_bits(), [false, false, true, true]);
}

#[test]
fn hour_one_is_0001() {
    let pattern = display_pattern(&time(1, 0, Meridiem::Am));
    assert_eq!(pattern.hour_bits(), [true, false, false, false]);
}

#[test]
fn hour_zero_lights_nothing() {
    assert_eq!(hour_bits(0), [false; 4]);
}

#[test]
fn minute_thirty_seven_is_100101() {
    let pattern = display_pattern(&time(4, 37, Meridiem::Am));
    assert_eq!(pattern.minute_bits(), [true, false, true, false, false, true]);
}

#[test]
fn minute_bits_are_lsb_first() {
    assert_eq!(minute_bits(1), [true, false, false, false, false, false]);
    assert_eq!(minute_bits(32), [false, false, false, false, false, true]);
    assert_eq!(minute_bits(59), [true, true, false, true, true, true]);
}

#[test]
fn every_minute_round_trips_through_its_bits() {
    for minute in 0..60u8 {
        let bits = minute_bits(minute);
        let value = bits
            .iter()
            .enumerate()
            .fold(0u8, |acc, (bit, on)| acc | ((*on as u8) << bit));
        assert_eq!(value, minute);
    }
}

#[test]
fn meridiem_line_is_on_for_pm_only() {
    assert!(display_pattern(&time(3, 0, Meridiem::Pm)).meridiem());
    assert!(!display_pattern(&time(3, 0, Meridiem::Am)).meridiem());
}

#[test]
fn get_matches_bit_accessors() {
    let pattern = display_pattern(&time(10, 45, Meridiem::Pm));
    for bit in 0..4u8 {
        assert_eq!(
            pattern.get(IndicatorLine::Hour(bit)),
            Some(pattern.hour_bits()[bit as usize])
        );
    }
    for bit in 0..6u8 {
        assert_eq!(
            pattern.get(IndicatorLine::Minute(bit)),
            Some(pattern.minute_bits()[bit as usize])
        );
    }
    assert_eq!(pattern.get(IndicatorLine::Meridiem), Some(true));
    assert_eq!(pattern.get(IndicatorLine::Hour(4)), None);
    assert_eq!(pattern.get(IndicatorLine::Minute(6)), None);
}

#[test]
fn blank_pattern_is_all_off() {
    assert!(DisplayPattern::BLANK.iter().all(|(_, on)| !on));
    assert_eq!(DisplayPattern::default(), DisplayPattern::BLANK);
}
