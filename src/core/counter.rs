/// Count-up text: the first run of ASCII digits in a label, with the text
/// around it kept verbatim ("200+ Races" -> "", 200, "+ Races").
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountUp {
    prefix: String,
    target: u64,
    suffix: String,
    width: usize,
}

impl CountUp {
    pub fn parse(text: &str) -> Option<Self> {
        let start = text.find(|c: char| c.is_ascii_digit())?;
        let len = text[start..]
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(text.len() - start);
        let digits = &text[start..start + len];
        let target = digits.parse::<u64>().ok()?;
        // Keep zero padding ("007") so the final frame reproduces the label.
        let width = if digits.len() > 1 && digits.starts_with('0') {
            digits.len()
        } else {
            0
        };
        Some(Self {
            prefix: text[..start].to_string(),
            target,
            suffix: text[start + len..].to_string(),
            width,
        })
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn format(&self, value: u64) -> String {
        format!(
            "{}{:0width$}{}",
            self.prefix,
            value,
            self.suffix,
            width = self.width
        )
    }

    /// Displayed value at eased progress `t`; exactly the target at `t >= 1`.
    pub fn value_at(&self, t: f32) -> u64 {
        if t >= 1.0 {
            return self.target;
        }
        let t = t.max(0.0) as f64;
        ((self.target as f64) * t).round().min(self.target as f64) as u64
    }

    pub fn text_at(&self, t: f32) -> String {
        self.format(self.value_at(t))
    }
}
