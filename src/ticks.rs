//! Tick placement for axes and the colour bar.

/// Evenly spaced "nice" values (steps of 1, 2 or 5 times a power of ten)
/// inside `[min, max]`, aiming for roughly `target` ticks.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max < min {
        return Vec::new();
    }
    if max == min {
        return vec![min];
    }

    let step = nice_step((max - min) / target.max(1) as f64);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;

    (first..=last)
        .map(|i| i as f64 * step)
        // -0.0 would otherwise be printed with its sign
        .map(|v| if v == 0.0 { 0.0 } else { v })
        .collect()
}

/// Whole-pixel ticks for an axis of `count` pixels, indexed from 0
pub fn pixel_ticks(count: usize, target: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let last = (count - 1) as f64;
    if last == 0.0 {
        return vec![0.0];
    }
    let step = nice_step(last / target.max(1) as f64).max(1.0);
    (0..=(last / step).floor() as usize)
        .map(|i| i as f64 * step)
        .collect()
}

/// Round a raw step up to 1, 2, 5 or 10 times a power of ten
pub fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Format a tick value with as many decimals as the tick spacing needs
pub fn format_tick(value: f64, step: f64) -> String {
    let abs = value.abs();
    if abs != 0.0 && !(1e-4..1e6).contains(&abs) {
        return format!("{value:.1e}");
    }
    let decimals = if step > 0.0 && step < 1.0 {
        (-step.log10().floor()) as usize
    } else {
        0
    };
    format!("{value:.decimals$}")
}

/// Spacing between consecutive ticks, 0 when there are fewer than two
pub fn tick_step(ticks: &[f64]) -> f64 {
    match ticks {
        [a, b, ..] => b - a,
        _ => 0.0,
    }
}
