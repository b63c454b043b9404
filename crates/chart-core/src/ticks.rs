// File: crates/chart-core/src/ticks.rs
// Summary: "Nice" tick generation and label formatting for linear and calendar scales.
// Notes:
// - Linear steps are powers of ten times 1, 2 or 5, with the thresholds at
//   sqrt(50), sqrt(10) and sqrt(2) so rounding picks the closest step count.
// - Calendar ticks never go below one day; the data only carries dates.

use chrono::{Datelike, NaiveDate, Weekday};

const E10: f64 = 7.0710678118654755;
const E5: f64 = 3.1622776601683795;
const E2: f64 = 1.4142135623730951;

/// Returns `(i1, i2, inc)`; ticks are `i * inc` for `i in i1..=i2`, or
/// `i / -inc` when `inc` is negative (sub-unit steps kept exact).
fn tick_params(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 { 10.0 } else if error >= E5 { 5.0 } else if error >= E2 { 2.0 } else { 1.0 };
    let mut i1;
    let mut i2;
    let inc;
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        i1 = (start * inv).round();
        i2 = (stop * inv).round();
        if i1 / inv < start { i1 += 1.0; }
        if i2 / inv > stop { i2 -= 1.0; }
        inc = -inv;
    } else {
        inc = 10f64.powf(power) * factor;
        i1 = (start / inc).round();
        i2 = (stop / inc).round();
        if i1 * inc < start { i1 += 1.0; }
        if i2 * inc > stop { i2 -= 1.0; }
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_params(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Up to about `count` round values covering `[start, stop]`, in the domain's order.
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() { return Vec::new(); }
    if start == stop { return vec![start]; }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_params(lo, hi, count as f64);
    if !(i2 >= i1) { return Vec::new(); }
    let n = (i2 - i1 + 1.0) as usize;
    let mut out: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect();
    if reverse { out.reverse(); }
    out
}

/// Distance between adjacent ticks from `linear_ticks` (negative for reversed domains).
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || start == stop { return 0.0; }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let inc = tick_params(lo, hi, count as f64).2;
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse { -step } else { step }
}

/// Fixed-point label with thousands separators; decimals follow the step.
pub fn format_linear(v: f64, step: f64) -> String {
    let step = step.abs();
    let decimals = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    let fixed = format!("{:.*}", decimals, v.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };
    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 { grouped.push(','); }
        grouped.push(ch);
    }
    if let Some(f) = frac_part {
        grouped.push('.');
        grouped.push_str(f);
    }
    let is_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    if v < 0.0 && !is_zero { format!("-{grouped}") } else { grouped }
}

/// Calendar interval between adjacent time ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeInterval {
    Day(u32),
    Week,
    Month(u32),
    Year(i32),
}

impl TimeInterval {
    fn approx_days(&self) -> f64 {
        match *self {
            TimeInterval::Day(n) => n as f64,
            TimeInterval::Week => 7.0,
            TimeInterval::Month(n) => 30.0 * n as f64,
            TimeInterval::Year(n) => 365.0 * n as f64,
        }
    }

    /// Whether `d` sits on a boundary of this interval.
    pub fn is_boundary(&self, d: NaiveDate) -> bool {
        match *self {
            TimeInterval::Day(n) => (d.day() - 1) % n.max(1) == 0,
            TimeInterval::Week => d.weekday() == Weekday::Sun,
            TimeInterval::Month(n) => d.day() == 1 && d.month0() % n.max(1) == 0,
            TimeInterval::Year(n) => d.ordinal() == 1 && d.year().rem_euclid(n.max(1)) == 0,
        }
    }
}

const LADDER: [TimeInterval; 6] = [
    TimeInterval::Day(1),
    TimeInterval::Day(2),
    TimeInterval::Week,
    TimeInterval::Month(1),
    TimeInterval::Month(3),
    TimeInterval::Year(1),
];

fn years_since_epoch(d: NaiveDate) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or(NaiveDate::MIN);
    (d - epoch).num_days() as f64 / 365.0
}

/// Pick the ladder interval whose spacing is closest to `span / count`.
/// Spans beyond a year step over whole years by a nice multiple.
pub fn time_interval(lo: NaiveDate, hi: NaiveDate, count: usize) -> TimeInterval {
    let span = (hi - lo).num_days() as f64;
    let target = span / count.max(1) as f64;
    match LADDER.iter().position(|iv| iv.approx_days() > target) {
        Some(0) => TimeInterval::Day(1),
        Some(i) => {
            let (a, b) = (LADDER[i - 1], LADDER[i]);
            if target / a.approx_days() < b.approx_days() / target { a } else { b }
        }
        None => {
            let step = tick_step(years_since_epoch(lo), years_since_epoch(hi), count);
            TimeInterval::Year(step.round().max(1.0) as i32)
        }
    }
}

/// Interval boundaries within `[lo, hi]`, both ends inclusive.
pub fn time_ticks(lo: NaiveDate, hi: NaiveDate, count: usize) -> Vec<NaiveDate> {
    if count == 0 || hi < lo { return Vec::new(); }
    let interval = time_interval(lo, hi, count);
    let mut out = Vec::new();
    match interval {
        TimeInterval::Year(_) => {
            for y in lo.year()..=hi.year() {
                if let Some(d) = NaiveDate::from_ymd_opt(y, 1, 1) {
                    if d >= lo && d <= hi && interval.is_boundary(d) { out.push(d); }
                }
            }
        }
        TimeInterval::Month(_) => {
            let mut cursor = NaiveDate::from_ymd_opt(lo.year(), lo.month(), 1);
            while let Some(d) = cursor {
                if d > hi { break; }
                if d >= lo && interval.is_boundary(d) { out.push(d); }
                cursor = d.checked_add_months(chrono::Months::new(1));
            }
        }
        TimeInterval::Week | TimeInterval::Day(_) => {
            for d in lo.iter_days().take_while(|d| *d <= hi) {
                if interval.is_boundary(d) { out.push(d); }
            }
        }
    }
    out
}

/// Multi-scale calendar label: the coarsest unit the date is a boundary of.
pub fn format_time(d: NaiveDate) -> String {
    if d.day() != 1 {
        if d.weekday() != Weekday::Sun { d.format("%a %d").to_string() } else { d.format("%b %d").to_string() }
    } else if d.month() != 1 {
        d.format("%B").to_string()
    } else {
        d.format("%Y").to_string()
    }
}
