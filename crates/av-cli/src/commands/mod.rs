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

pub mod extract;
pub mod fetch;
pub mod format;
pub mod run;

use anyhow::{Context, Result, bail};
use av_core::Ticker;
use clap::Args;
use std::io::{self, BufRead, Write};

/// Ticker argument shared by the pipeline subcommands
#[derive(Args, Clone, Debug)]
pub struct TickerArgs {
  /// Ticker symbol (prompted for when omitted)
  pub ticker: Option<String>,
}

impl TickerArgs {
  /// Resolve the ticker from the argument or an interactive prompt
  pub fn resolve(&self) -> Result<Ticker> {
    match &self.ticker {
      Some(raw) => Ticker::new(raw).with_context(|| format!("Invalid ticker symbol {:?}", raw)),
      None => {
        let stdin = io::stdin();
        prompt_ticker(&mut stdin.lock(), &mut io::stdout())
      }
    }
  }
}

/// Ask for a symbol on `output` and read one line from `input`
pub fn prompt_ticker<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Ticker> {
  write!(output, "\nEnter Symbol: ")?;
  output.flush()?;

  let mut line = String::new();
  if input.read_line(&mut line)? == 0 {
    bail!("No ticker symbol entered");
  }

  Ticker::new(&line).with_context(|| format!("Invalid ticker symbol {:?}", line.trim()))
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Cursor;

  #[test]
  fn test_prompt_upper_cases_input() {
    let mut input = Cursor::new("aapl\n");
    let mut output = Vec::new();

    let ticker = prompt_ticker(&mut input, &mut output).unwrap();

    assert_eq!(ticker.as_str(), "AAPL");
    assert_eq!(String::from_utf8(output).unwrap(), "\nEnter Symbol: ");
  }

  #[test]
  fn test_prompt_rejects_empty_input() {
    assert!(prompt_ticker(&mut Cursor::new(""), &mut Vec::new()).is_err());
    assert!(prompt_ticker(&mut Cursor::new("\n"), &mut Vec::new()).is_err());
  }

  #[test]
  fn test_argument_takes_precedence() {
    let args = TickerArgs { ticker: Some("msft".to_string()) };
    assert_eq!(args.resolve().unwrap().as_str(), "MSFT");

    let bad = TickerArgs { ticker: Some("../etc".to_string()) };
    assert!(bad.resolve().is_err());
  }
}
