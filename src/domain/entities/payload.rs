use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::FeatureVector;

const SEARCH_RESULTS_PREFIX: &str = "List of images that are closest in order: ";
pub const CALL_FAILED_MESSAGE: &str = "Failed to create call";

pub const DEFAULT_VISION_PICTURE1: &str = "images/picture1.jpg";
pub const DEFAULT_VISION_PICTURE2: &str = "images/picture2.jpg";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub vector: FeatureVector,
}

impl SearchRequest {
    pub fn new(vector: FeatureVector) -> Self {
        Self { vector }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisionRequest {
    pub picture1: String,
    pub picture2: String,
}

impl Default for VisionRequest {
    fn default() -> Self {
        Self::new(DEFAULT_VISION_PICTURE1, DEFAULT_VISION_PICTURE2)
    }
}

impl VisionRequest {
    pub fn new(picture1: impl Into<String>, picture2: impl Into<String>) -> Self {
        Self {
            picture1: picture1.into(),
            picture2: picture2.into(),
        }
    }
}

/// Text shown in the results region after a successful search.
pub fn search_results_text(results: &Value) -> String {
    format!("{SEARCH_RESULTS_PREFIX}{}", render_text(results))
}

/// Renders a JSON value the way a page renders it when concatenated into a
/// string: arrays join their elements with commas, strings lose their quotes,
/// and objects collapse to `[object Object]`.
pub fn render_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        other => render_inner(other),
    }
}

fn render_inner(value: &Value) -> String {
    match value {
        // null elements inside an array join as empty strings
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.is_f64(), n.as_f64()) {
            (true, Some(f)) => render_number(f),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(render_inner)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Shortest round-trip digits laid out like `Number.prototype.toString`:
/// plain decimal for exponents in `-7 < e < 21`, otherwise `d.ddde±x`.
fn render_number(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }

    let sign = if f < 0.0 { "-" } else { "" };
    let scientific = format!("{:e}", f.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{f}");
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{f}");
    };

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{exp_sign}{}", exponent.abs())
        } else {
            format!("{lead}.{rest}e{exp_sign}{}", exponent.abs())
        }
    };

    format!("{sign}{body}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_results_text_joins_names() {
        let text = search_results_text(&json!(["imgA", "imgB"]));
        assert_eq!(text, "List of images that are closest in order: imgA,imgB");
    }

    #[test]
    fn test_render_scalars() {
        assert_eq!(render_text(&json!("ok")), "ok");
        assert_eq!(render_text(&json!(42)), "42");
        assert_eq!(render_text(&json!(3.0)), "3");
        assert_eq!(render_text(&json!(0.25)), "0.25");
        assert_eq!(render_text(&json!(-2.5)), "-2.5");
        assert_eq!(render_text(&json!(123.456)), "123.456");
        assert_eq!(render_text(&json!(true)), "true");
        assert_eq!(render_text(&Value::Null), "null");
    }

    #[test]
    fn test_render_numbers_switch_to_exponent_form() {
        assert_eq!(render_text(&json!([1e-7, 1e21])), "1e-7,1e+21");
        assert_eq!(render_text(&json!(1.5e-7)), "1.5e-7");
        assert_eq!(render_text(&json!(2.5e22)), "2.5e+22");
        assert_eq!(render_text(&json!(0.000001)), "0.000001");
        assert_eq!(render_text(&json!(1e20)), "100000000000000000000");
        assert_eq!(render_text(&json!(-0.0)), "0");
        assert_eq!(render_text(&json!(-3e-9)), "-3e-9");
    }

    #[test]
    fn test_render_nested_arrays_flatten() {
        let value = json!([["a.jpg", 0.9], ["b.jpg", 0.5], null]);
        assert_eq!(render_text(&value), "a.jpg,0.9,b.jpg,0.5,");
    }

    #[test]
    fn test_render_object() {
        assert_eq!(render_text(&json!({"score": 1})), "[object Object]");
        assert_eq!(render_text(&json!([{"a": 1}, "x"])), "[object Object],x");
    }

    #[test]
    fn test_request_bodies() {
        let search = SearchRequest::new(FeatureVector::new("[0.1, 0.2]"));
        assert_eq!(
            serde_json::to_value(&search).unwrap(),
            json!({"vector": "[0.1, 0.2]"})
        );

        let vision = VisionRequest::new("images/a.jpg", "images/b.jpg");
        assert_eq!(
            serde_json::to_value(&vision).unwrap(),
            json!({"picture1": "images/a.jpg", "picture2": "images/b.jpg"})
        );
    }
}
