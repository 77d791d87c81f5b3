//! Uniform to-string contract for call arguments and results.

use serde::Serialize;

/// Human-readable rendering written into call records.
pub trait Render {
    fn render(&self) -> String;
}

/// Shortest round-trip form with a fractional part (`3.0`, `6.5`).
///
/// Magnitudes below `1e-4` or from `1e16` up switch to exponent form with a
/// signed, two-digit exponent (`1e+16`, `1.5e-05`). Non-finite values are
/// `nan`, `inf` and `-inf`.
pub(crate) fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let shortest = format!("{value:?}");
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => shortest,
    }
}

/// Render a serde-serializable record as compact JSON.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| format!("<unrenderable: {err}>"))
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

impl Render for i64 {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl Render for usize {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl Render for f64 {
    fn render(&self) -> String {
        format_float(*self)
    }
}

impl Render for bool {
    fn render(&self) -> String {
        if *self { "True" } else { "False" }.to_string()
    }
}

impl Render for str {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl Render for String {
    fn render(&self) -> String {
        self.clone()
    }
}

impl Render for () {
    fn render(&self) -> String {
        "None".to_string()
    }
}

impl<T: Render> Render for Option<T> {
    fn render(&self) -> String {
        match self {
            Some(value) => value.render(),
            None => "None".to_string(),
        }
    }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self) -> String {
        let items: Vec<String> = self.iter().map(Render::render).collect();
        format!("[{}]", items.join(", "))
    }
}
