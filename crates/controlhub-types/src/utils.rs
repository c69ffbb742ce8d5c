//! Small shared helpers.

/// Control and control set names must only contain alphabetic characters and
/// whitespace (`^[A-Za-z\s]*$`).
pub fn is_valid_name(name: &str) -> bool {
	name.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_alphabetic_names() {
		assert!(is_valid_name("Access Control"));
		assert!(is_valid_name("AccessControl"));
		assert!(is_valid_name(""));
	}

	#[test]
	fn rejects_digits_and_punctuation() {
		assert!(!is_valid_name("Access Control 2"));
		assert!(!is_valid_name("access-control"));
		assert!(!is_valid_name("sécurité"));
	}
}

// vim: ts=4
