use stencil::error::Error;
use stencil::package::PackageSpecifier;
use stencil::squash::squash_packages;

fn spec(org: Option<&str>, name: &str, version: Option<&str>) -> PackageSpecifier {
    PackageSpecifier {
        org: org.map(str::to_string),
        name: name.to_string(),
        version: version.map(str::to_string),
    }
}

#[test]
fn test_parse() {
    assert_eq!("foo-bar".parse::<PackageSpecifier>().unwrap(), spec(None, "foo-bar", None));
    assert_eq!(
        "@foo/bar".parse::<PackageSpecifier>().unwrap(),
        spec(Some("foo"), "bar", None)
    );
    assert_eq!(
        "foo-bar@1.0.0".parse::<PackageSpecifier>().unwrap(),
        spec(None, "foo-bar", Some("1.0.0"))
    );
    assert_eq!(
        "@foo/bar@1.0.0".parse::<PackageSpecifier>().unwrap(),
        spec(Some("foo"), "bar", Some("1.0.0"))
    );
}

#[test]
fn test_parse_invalid() {
    for invalid in ["@foo/bar/baz", "foo/bar", ""] {
        match invalid.parse::<PackageSpecifier>() {
            Err(Error::InvalidPackageSpecifier(input)) => assert_eq!(input, invalid),
            other => panic!("expected InvalidPackageSpecifier, got {other:?}"),
        }
    }
}

#[test]
fn test_serialize() {
    assert_eq!(spec(None, "foo-bar", None).to_string(), "foo-bar");
    assert_eq!(spec(Some("foo"), "bar", None).to_string(), "@foo/bar");
    assert_eq!(spec(None, "foo-bar", Some("1.0.0")).to_string(), "foo-bar@1.0.0");
    assert_eq!(spec(Some("foo"), "bar", Some("1.0.0")).to_string(), "@foo/bar@1.0.0");
}

#[test]
fn test_round_trip() {
    for input in ["foo-bar", "@foo/bar", "foo-bar@1.0.0", "@foo/bar@~9", "foo@1.2.3-beta.1"] {
        let parsed: PackageSpecifier = input.parse().unwrap();
        assert_eq!(parsed.to_string(), input);
    }
}

#[test]
fn test_version_captures_everything_after_the_name() {
    let parsed: PackageSpecifier = "@foo/bar@npm:baz@1".parse().unwrap();
    assert_eq!(parsed, spec(Some("foo"), "bar", Some("npm:baz@1")));
}

#[test]
fn test_squash_packages() {
    assert_eq!(
        squash_packages(&["foo-bar@1.0.0", "foo-bar@0.0.1"]).unwrap(),
        ["foo-bar@0.0.1"]
    );
    assert_eq!(
        squash_packages(&["foo-bar@1.0.0", "foo-baz", "foo-bar@0.0.1"]).unwrap(),
        ["foo-bar@0.0.1", "foo-baz"]
    );
    assert_eq!(
        squash_packages(&["@foo/foo-bar@1.0.0", "@baz/foo-bar@0.0.1"]).unwrap(),
        ["@baz/foo-bar@0.0.1"]
    );
    assert_eq!(
        squash_packages(&["@foo/foo-bar@1.0.0", "@baz/foo-bar@0.0.1", "@types/foo-bar@0.0.2"])
            .unwrap(),
        ["@baz/foo-bar@0.0.1", "@types/foo-bar@0.0.2"]
    );
    assert_eq!(
        squash_packages(&["@types/foo-bar@0.0.2", "@foo/foo-bar@1.0.0", "@baz/foo-bar@0.0.1"])
            .unwrap(),
        ["@types/foo-bar@0.0.2", "@baz/foo-bar@0.0.1"]
    );
}

#[test]
fn test_squash_keeps_first_position_and_last_value() {
    assert_eq!(
        squash_packages(&["@t/foo@0.0.2", "@a/foo@1.0.0", "@b/foo@0.0.1"]).unwrap(),
        ["@t/foo@0.0.2", "@b/foo@0.0.1"]
    );
}

#[test]
fn test_squash_packages_is_idempotent() {
    let once =
        squash_packages(&["@t/foo@0.0.2", "@a/foo@1.0.0", "@b/foo@0.0.1", "bar@2"]).unwrap();
    let twice = squash_packages(&once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_squash_packages_rejects_invalid_entries() {
    assert!(squash_packages(&["foo", "foo/bar"]).is_err());
}
