//! Early-access signup: address validation and the request handed to the host.
//!
//! The hosted auth backend does the actual signup. This side validates the
//! address, builds a [`SignupRequest`], and dispatches it to the page as a
//! `opudoc:signup` DOM event whose `detail` is the request as JSON.

use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit};

/// Event name the host listens for to forward signups to the backend.
pub const SIGNUP_EVENT: &str = "opudoc:signup";

/// Why a signup did not go through. `Display` is the inline form message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SignupError {
	#[error("Please enter your email address.")]
	Empty,
	#[error("\"{0}\" doesn't look like an email address.")]
	Invalid(String),
	#[error("Signup failed. Please try again later.")]
	Dispatch(String),
}

/// Form progress.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SignupStatus {
	#[default]
	Editing,
	Submitting,
	/// Request handed off; the user now has to confirm by email.
	Submitted,
	Failed(SignupError),
}

/// Payload for the hosted signup call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
	pub email: String,
	pub wants_newsletter: bool,
	pub early_access: bool,
}

impl SignupRequest {
	pub fn new(raw_email: &str, wants_newsletter: bool) -> Result<Self, SignupError> {
		Ok(Self {
			email: validate_email(raw_email)?,
			wants_newsletter,
			early_access: true,
		})
	}
}

/// Trim and sanity-check an address. Deliverability is the backend's problem;
/// this only rejects input that cannot be an address.
pub fn validate_email(raw: &str) -> Result<String, SignupError> {
	let email = raw.trim();
	if email.is_empty() {
		return Err(SignupError::Empty);
	}
	let invalid = || SignupError::Invalid(email.to_string());

	if email.chars().any(char::is_whitespace) {
		return Err(invalid());
	}
	let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
	if local.is_empty() || domain.contains('@') {
		return Err(invalid());
	}
	let labels: Vec<&str> = domain.split('.').collect();
	if labels.len() < 2
		|| labels
			.iter()
			.any(|l| l.is_empty() || l.starts_with('-') || l.ends_with('-'))
	{
		return Err(invalid());
	}
	Ok(email.to_string())
}

/// Hand the request to the host page.
pub fn dispatch(request: &SignupRequest) -> Result<(), SignupError> {
	let json = serde_json::to_string(request).map_err(|e| SignupError::Dispatch(e.to_string()))?;
	let window = web_sys::window().ok_or_else(|| SignupError::Dispatch("no window".into()))?;

	let init = CustomEventInit::new();
	init.set_detail(&JsValue::from_str(&json));
	let event = CustomEvent::new_with_event_init_dict(SIGNUP_EVENT, &init)
		.map_err(|e| SignupError::Dispatch(format!("{e:?}")))?;
	window
		.dispatch_event(&event)
		.map_err(|e| SignupError::Dispatch(format!("{e:?}")))?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_plain_addresses() {
		assert_eq!(validate_email("ada@example.com"), Ok("ada@example.com".into()));
		assert_eq!(
			validate_email("  first.last+docs@mail.example.co.uk \n"),
			Ok("first.last+docs@mail.example.co.uk".into())
		);
	}

	#[test]
	fn rejects_empty() {
		assert_eq!(validate_email(""), Err(SignupError::Empty));
		assert_eq!(validate_email("   "), Err(SignupError::Empty));
	}

	#[test]
	fn rejects_malformed() {
		for bad in [
			"plainaddress",
			"@example.com",
			"ada@",
			"ada@localhost",
			"ada@@example.com",
			"ada@exa mple.com",
			"ada@example..com",
			"ada@-example.com",
			"ada@example.com.",
		] {
			assert!(
				matches!(validate_email(bad), Err(SignupError::Invalid(_))),
				"{bad} should be rejected"
			);
		}
	}

	#[test]
	fn request_serializes_camel_case() {
		let req = SignupRequest::new(" ada@example.com ", false).unwrap();
		let json = serde_json::to_value(&req).unwrap();
		assert_eq!(
			json,
			serde_json::json!({
				"email": "ada@example.com",
				"wantsNewsletter": false,
				"earlyAccess": true,
			})
		);
	}

	#[test]
	fn invalid_request_is_not_built() {
		assert_eq!(
			SignupRequest::new("nope", true),
			Err(SignupError::Invalid("nope".into()))
		);
	}

	#[test]
	fn error_messages_are_user_facing() {
		assert_eq!(SignupError::Empty.to_string(), "Please enter your email address.");
		assert_eq!(
			SignupError::Invalid("x".into()).to_string(),
			"\"x\" doesn't look like an email address."
		);
	}
}
