/// Line separator used by a SDP document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSeparator {
    CrLf,
    Lf,
}

impl LineSeparator {
    /// `CRLF` if the text contains at least one, `LF` otherwise
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            LineSeparator::CrLf
        } else {
            LineSeparator::Lf
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineSeparator::CrLf => "\r\n",
            LineSeparator::Lf => "\n",
        }
    }
}

/// Split a SDP document into its lines, using the separator it was written with
///
/// Lines are returned as they are, including empty ones.
pub fn split_lines(text: &str) -> (LineSeparator, Vec<&str>) {
    let separator = LineSeparator::detect(text);

    (separator, text.split(separator.as_str()).collect())
}
