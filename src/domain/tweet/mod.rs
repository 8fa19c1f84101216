pub mod entity;
pub mod schemas;

use uuid::Uuid;

/// Canonical form of a user/tweet identifier. Identifiers reach us in mixed
/// representations (hyphenated, simple, braced, any casing) depending on
/// which subsystem produced them, so every equality check must go through
/// this one function on BOTH sides.
pub fn canonical_id(raw: &str) -> Option<Uuid> {
	Uuid::parse_str(raw.trim()).ok()
}

pub fn same_identity(
	lhs: &str,
	rhs: &str,
) -> bool {
	match (canonical_id(lhs), canonical_id(rhs)) {
		(Some(l), Some(r)) => l == r,
		_ => false,
	}
}

#[test]
fn test_canonical_id_mixed_representations() {
	let hyphenated = "550e8400-e29b-41d4-a716-446655440000";
	let simple = "550e8400e29b41d4a716446655440000";
	let braced = "{550e8400-e29b-41d4-a716-446655440000}";
	let upper = "550E8400-E29B-41D4-A716-446655440000";

	let id = canonical_id(hyphenated).unwrap();
	assert_eq!(canonical_id(simple), Some(id));
	assert_eq!(canonical_id(braced), Some(id));
	assert_eq!(canonical_id(upper), Some(id));
	assert_eq!(canonical_id(" 550e8400-e29b-41d4-a716-446655440000 "), Some(id));

	assert_eq!(canonical_id("not-an-identifier"), None);
	assert_eq!(canonical_id(""), None);
}

#[test]
fn test_same_identity() {
	assert!(same_identity(
		"550e8400e29b41d4a716446655440000",
		"550E8400-E29B-41D4-A716-446655440000"
	));
	assert!(!same_identity(
		"550e8400-e29b-41d4-a716-446655440000",
		"650e8400-e29b-41d4-a716-446655440000"
	));

	// a malformed side can never be "the same identity"
	assert!(!same_identity("gibberish", "gibberish"));
	assert!(!same_identity("550e8400-e29b-41d4-a716-446655440000", ""));
}
