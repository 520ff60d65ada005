//! Rewriting and parsing of ICE candidate lines in SDP documents

use sdp_types::split_lines;
use std::borrow::Cow;
use std::fmt;

const CANDIDATE_PREFIX: &str = "a=candidate:";
const END_OF_CANDIDATES: &str = "a=end-of-candidates";

fn is_candidate(line: &str) -> bool {
    line.starts_with(CANDIDATE_PREFIX)
}

fn is_end_of_candidates(line: &str) -> bool {
    line.trim_end() == END_OF_CANDIDATES
}

/// Replace the ICE candidates of every media section in `sdp`
///
/// All `a=candidate:` lines are removed, at session level as well as from each `m=` section,
/// and `candidates` are inserted once per section. If the section carries its own `a=end-of-candidates`, the candidates are
/// placed right before it. Otherwise they are followed by a new `a=end-of-candidates` and placed
/// before the first empty line or at the end of the section.
///
/// Candidates may be given with or without the leading `a=`. The line separator of `sdp` is kept.
/// Returns `sdp` unchanged if `candidates` is empty.
pub fn replace_candidates<S: AsRef<str>>(sdp: &str, candidates: &[S]) -> String {
    if candidates.is_empty() {
        return sdp.to_owned();
    }

    let candidates: Vec<Cow<'_, str>> = candidates
        .iter()
        .map(|candidate| {
            let candidate = candidate.as_ref().trim();

            if candidate.starts_with("candidate:") {
                Cow::Owned(format!("a={candidate}"))
            } else {
                Cow::Borrowed(candidate)
            }
        })
        .collect();

    let (separator, lines) = split_lines(sdp);

    let mut sections: Vec<&[&str]> = vec![];
    let mut start = 0;

    for (i, line) in lines.iter().enumerate() {
        if line.starts_with("m=") {
            sections.push(&lines[start..i]);
            start = i;
        }
    }
    sections.push(&lines[start..]);

    let mut sections = sections.into_iter();
    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + candidates.len() * 4);

    // session level candidates are dropped, nothing is inserted there
    if let Some(session) = sections.next() {
        out.extend(session.iter().copied().filter(|line| !is_candidate(line)));
    }

    for section in sections {
        let kept: Vec<&str> = section
            .iter()
            .copied()
            .filter(|line| !is_candidate(line))
            .collect();

        let (at, end_marker) = match kept.iter().position(|line| is_end_of_candidates(line)) {
            Some(at) => (at, false),
            None => {
                let at = kept
                    .iter()
                    .position(|line| line.trim_end().len() <= 2)
                    .unwrap_or(kept.len());

                (at, true)
            }
        };

        out.extend_from_slice(&kept[..at]);
        out.extend(candidates.iter().map(AsRef::as_ref));
        if end_marker {
            out.push(END_OF_CANDIDATES);
        }
        out.extend_from_slice(&kept[at..]);
    }

    out.join(separator.as_str())
}

/// Collect the `a=candidate:` lines of `sdp` up to the first `a=end-of-candidates`
pub fn extract_candidates(sdp: &str) -> Vec<&str> {
    let (_, lines) = split_lines(sdp);

    lines
        .into_iter()
        .map(str::trim_end)
        .take_while(|line| !is_end_of_candidates(line))
        .filter(|line| is_candidate(line))
        .collect()
}

/// Parsed ICE candidate line
///
/// [RFC8839](https://www.rfc-editor.org/rfc/rfc8839.html#section-5.1)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub foundation: String,

    /// Component id, 1 for RTP
    pub component: u16,

    /// `udp` or `tcp`
    pub transport: String,
    pub priority: u32,
    pub address: String,
    pub port: u16,

    /// Type including its keyword, e.g. `typ host`
    pub kind: String,

    /// Everything after the type, e.g. `raddr 10.0.0.1 rport 9 tcptype passive`
    pub extra: String,

    pub related_address: Option<String>,
    pub related_port: Option<u16>,
}

impl Candidate {
    /// Parse a single `a=candidate:` (or `candidate:`) line
    ///
    /// Returns `None` if the line is no candidate line, has less than 8 tokens or a
    /// numeric field cannot be parsed.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let value = line
            .strip_prefix(CANDIDATE_PREFIX)
            .or_else(|| line.strip_prefix("candidate:"))?;

        let tokens: Vec<&str> = value.split_ascii_whitespace().collect();

        if tokens.len() < 8 {
            log::warn!("candidate line with less than 8 tokens, {line:?}");
            return None;
        }

        let numeric = (
            tokens[1].parse::<u16>(),
            tokens[3].parse::<u32>(),
            tokens[5].parse::<u16>(),
        );

        let (Ok(component), Ok(priority), Ok(port)) = numeric else {
            log::warn!("candidate line with invalid component, priority or port, {line:?}");
            return None;
        };

        let extra = &tokens[8..];

        let related = |key: &str| {
            extra
                .windows(2)
                .find(|pair| pair[0] == key)
                .map(|pair| pair[1])
        };

        Some(Self {
            foundation: tokens[0].into(),
            component,
            transport: tokens[2].into(),
            priority,
            address: tokens[4].into(),
            port,
            kind: format!("{} {}", tokens[6], tokens[7]),
            extra: extra.join(" "),
            related_address: related("raddr").map(Into::into),
            related_port: related("rport").and_then(|port| port.parse().ok()),
        })
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{CANDIDATE_PREFIX}{} {} {} {} {} {} {}",
            self.foundation,
            self.component,
            self.transport,
            self.priority,
            self.address,
            self.port,
            self.kind
        )?;

        if !self.extra.is_empty() {
            write!(f, " {}", self.extra)?;
        }

        Ok(())
    }
}

/// Parse candidate lines, skipping every line that is not a valid candidate
///
/// Besides lines with less than 8 tokens, lines whose component, priority or port is not a
/// number are skipped too (with a warning) instead of being read as 0.
pub fn parse_candidate_lines<'a, I>(lines: I) -> Vec<Candidate>
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().filter_map(Candidate::parse).collect()
}
