/// Turns an error into `None` after logging it, for conversions whose caller has a fallback ready.
pub trait ResultExt<T> {
	fn ok_or_log(self, what: &str) -> Option<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
	fn ok_or_log(self, what: &str) -> Option<T> {
		match self {
			Ok(value) => Some(value),
			Err(err) => {
				tracing::warn!(what, %err, "using fallback");
				None
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn passes_values_through() {
		let ok: Result<u32, String> = Ok(3);
		assert_eq!(ok.ok_or_log("three"), Some(3));
		let err: Result<u32, String> = Err("nope".to_owned());
		assert_eq!(err.ok_or_log("three"), None);
	}
}
