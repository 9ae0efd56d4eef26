/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Display formatting for the numeric strings reported by the API.
//!
//! Every formatter accepts the raw value and never fails: `None`, `""`,
//! `"N/A"`, `"None"`, non-numeric and non-finite input all render as `"N/A"`.
//! Negative numbers keep the sign after the currency symbol (`"$-1,234"`).

use av_models::NOT_AVAILABLE;

/// Whole-dollar amount with thousands separators: `"1234567"` → `"$1,234,567"`
pub fn currency_format(value: Option<&str>) -> String {
  render(value, |v| format!("${}", grouped(v, 0)))
}

/// Dollar amount with cents: `"3.5"` → `"$3.50"`
pub fn currency_format_decimal(value: Option<&str>) -> String {
  render(value, |v| format!("${}", grouped(v, 2)))
}

/// Plain number with two decimals: `"23.456"` → `"23.46"`
pub fn number_format(value: Option<&str>) -> String {
  render(value, |v| grouped(v, 2))
}

/// Ratio shown as a percentage: `"0.1567"` → `"15.67%"`
pub fn rate_format(value: Option<&str>) -> String {
  render(value, |v| format!("{:.2}%", v * 100.0))
}

/// Value already expressed in percentage points: `"4.1667"` → `"4.17%"`
pub fn points_format(value: Option<&str>) -> String {
  render(value, |v| format!("{}%", grouped(v, 2)))
}

/// Free text such as names and dates; blanks and `"None"` become `"N/A"`
pub fn text_or_na(value: Option<&str>) -> String {
  match value.map(str::trim) {
    None | Some("") | Some("None") => NOT_AVAILABLE.to_string(),
    Some(text) => text.to_string(),
  }
}

fn parse_number(value: Option<&str>) -> Option<f64> {
  let text = value?.trim();
  if text.is_empty() || text == NOT_AVAILABLE || text == "None" {
    return None;
  }
  text.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn render(value: Option<&str>, fmt: impl FnOnce(f64) -> String) -> String {
  match parse_number(value) {
    Some(number) => fmt(number),
    None => NOT_AVAILABLE.to_string(),
  }
}

fn grouped(value: f64, precision: usize) -> String {
  let text = format!("{:.*}", precision, value);
  let (sign, unsigned) = match text.strip_prefix('-') {
    Some(rest) => ("-", rest),
    None => ("", text.as_str()),
  };
  let (integer, fraction) = match unsigned.split_once('.') {
    Some((integer, fraction)) => (integer, Some(fraction)),
    None => (unsigned, None),
  };

  let mut out = String::with_capacity(text.len() + integer.len() / 3);
  out.push_str(sign);
  out.push_str(&group_thousands(integer));
  if let Some(fraction) = fraction {
    out.push('.');
    out.push_str(fraction);
  }
  out
}

fn group_thousands(digits: &str) -> String {
  let len = digits.len();
  let mut out = String::with_capacity(len + len / 3);
  for (i, c) in digits.chars().enumerate() {
    if i > 0 && (len - i) % 3 == 0 {
      out.push(',');
    }
    out.push(c);
  }
  out
}
