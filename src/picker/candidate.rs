/// An item the picker can suggest.
///
/// `display_name` is what the default matcher filters on and what the panel
/// renders; `commit_value` is the text written back into the field when the
/// candidate is selected.
pub trait Candidate {
    fn display_name(&self) -> &str;

    fn detail(&self) -> Option<String> {
        None
    }

    fn commit_value(&self) -> String {
        self.display_name().to_string()
    }
}

impl Candidate for String {
    fn display_name(&self) -> &str {
        self
    }
}

impl Candidate for &str {
    fn display_name(&self) -> &str {
        self
    }
}
