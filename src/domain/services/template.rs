//! Header template
//!
//! Every generated header has the same shape:
//!
//! ```text
//! /**************************************************************************/
//! /*  logo_svg.gen.h                                                        */
//! /**************************************************************************/
//! /* <license section lines>                                                */
//! /**************************************************************************/
//!
//! /* THIS FILE IS GENERATED. EDITS WILL BE LOST. */
//!
//! #pragma once
//!
//! inline constexpr const char *_ios_logo_svg = R"<!>(...)<!>";
//! ```
//!
//! Only the license sections are configurable; the marker and include guard
//! are fixed.

use crate::domain::value_objects::Delimiter;

/// Marker placed after the license block
pub const GENERATED_MARKER: &str = "/* THIS FILE IS GENERATED. EDITS WILL BE LOST. */";

/// One-time include guard
pub const INCLUDE_GUARD: &str = "#pragma once";

const RULE: &str = "/**************************************************************************/";

/// Text width between `/* ` and ` */`
const MARGIN: usize = 70;

const DEFAULT_LICENSE: &[&str] = &[
    "Permission is hereby granted, free of charge, to any person obtaining",
    "a copy of this software and associated documentation files (the",
    "\"Software\"), to deal in the Software without restriction, including",
    "without limitation the rights to use, copy, modify, merge, publish,",
    "distribute, sublicense, and/or sell copies of the Software, and to",
    "permit persons to whom the Software is furnished to do so, subject to",
    "the following conditions:",
    "",
    "The above copyright notice and this permission notice shall be",
    "included in all copies or substantial portions of the Software.",
    "",
    "THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND,",
    "EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF",
    "MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT.",
    "IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY",
    "CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT,",
    "TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE",
    "SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.",
];

/// License boilerplate shared by every header of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderTemplate {
    sections: Vec<Vec<String>>,
}

impl Default for HeaderTemplate {
    fn default() -> Self {
        Self {
            sections: vec![DEFAULT_LICENSE.iter().map(|s| s.to_string()).collect()],
        }
    }
}

impl HeaderTemplate {
    /// Build a template from license sections; each section is framed and
    /// followed by a rule line. Leading spaces in lines are kept.
    pub fn new(sections: Vec<Vec<String>>) -> Self {
        Self { sections }
    }

    /// Section lines wider than the frame; they are written unpadded
    pub fn overflowing_lines(&self) -> Vec<&str> {
        self.sections
            .iter()
            .flatten()
            .filter(|line| line.chars().count() > MARGIN)
            .map(String::as_str)
            .collect()
    }

    /// Whether `file_name` fits the title line of the frame
    pub fn fits_title(file_name: &str) -> bool {
        file_name.chars().count() <= MARGIN
    }

    /// The framed copyright block, ending with a rule line and newline
    pub fn copyright_block(&self, file_name: &str) -> String {
        let mut out = String::new();
        out.push_str(RULE);
        out.push('\n');
        out.push_str(&format!("/*  {:<width$}*/\n", file_name, width = MARGIN));
        out.push_str(RULE);
        out.push('\n');
        for section in &self.sections {
            for line in section {
                out.push_str(&format!("/* {:<width$} */\n", line, width = MARGIN));
            }
            out.push_str(RULE);
            out.push('\n');
        }
        out
    }

    /// Compose a complete header
    pub fn render(
        &self,
        file_name: &str,
        constant: &str,
        delimiter: &Delimiter,
        payload: &str,
    ) -> String {
        let mut out = self.copyright_block(file_name);
        out.push('\n');
        out.push_str(GENERATED_MARKER);
        out.push_str("\n\n");
        out.push_str(INCLUDE_GUARD);
        out.push_str("\n\n");
        out.push_str("inline constexpr const char *");
        out.push_str(constant);
        out.push_str(" = ");
        out.push_str(&delimiter.wrap(payload));
        out.push_str(";\n");
        out
    }
}
