/// Accumulates the named fields of one WDAT record and renders them as a
/// single text line.
///
/// Each field renders as ``name=`value` ``; fields are joined by single
/// spaces with no trailing space. The backtick delimiter is not expected
/// inside values, which lets a consumer locate each `name=` token and
/// capture text up to the closing delimiter. Any text value is accepted,
/// including the empty string; field semantics are the caller's business.
#[derive(Debug, Default)]
pub struct LineBuilder {
    line: String,
}

impl LineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one field. Call order is output order.
    pub fn push_field(&mut self, name: &str, value: &str) {
        if !self.line.is_empty() {
            self.line.push(' ');
        }
        self.line.push_str(name);
        self.line.push_str("=`");
        self.line.push_str(value);
        self.line.push('`');
    }

    /// The finished line.
    pub fn finish(self) -> String {
        self.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_field() {
        let mut line = LineBuilder::new();
        line.push_field("id", "0");
        assert_eq!(line.finish(), "id=`0`");
    }

    #[test]
    fn test_fields_join_in_call_order() {
        let mut line = LineBuilder::new();
        line.push_field("id", "2");
        line.push_field("vrevent", "ok");
        line.push_field("extra", "last");
        assert_eq!(line.finish(), "id=`2` vrevent=`ok` extra=`last`");
    }

    #[test]
    fn test_empty_value_kept() {
        let mut line = LineBuilder::new();
        line.push_field("pname", "");
        line.push_field("cpu", "3");
        assert_eq!(line.finish(), "pname=`` cpu=`3`");
    }

    #[test]
    fn test_no_trailing_space() {
        let mut line = LineBuilder::new();
        line.push_field("a", "1");
        line.push_field("b", "2");
        let text = line.finish();
        assert!(!text.ends_with(' '));
    }
}
