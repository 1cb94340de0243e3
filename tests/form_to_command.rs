use rsync_preview::command::{TransferRequest, build_command};
use rsync_preview::form::{Origin, preview};

#[test]
fn typing_a_path_then_toggling_contents() {
    let mut fields = vec![
        ("src[path]".to_string(), "/home/me/photos".to_string()),
        ("dest[login]".to_string(), "me".to_string()),
        ("dest[host]".to_string(), "nas".to_string()),
        ("dest[path]".to_string(), "/pool/photos".to_string()),
        ("setting[archive]".to_string(), "on".to_string()),
    ];

    let first = preview(fields.clone(), Origin::Initial, "rsync");
    assert!(!first.contents);
    assert_eq!(first.command, r#"rsync -a "/home/me/photos" me@nas:"/pool/photos""#);

    fields.push(("setting[contents]".to_string(), "on".to_string()));
    let checked = preview(fields.clone(), Origin::Contents, "rsync");
    assert_eq!(checked.source_path, "/home/me/photos/");
    assert_eq!(checked.command, r#"rsync -a "/home/me/photos/" me@nas:"/pool/photos""#);

    fields[0].1 = checked.source_path.clone();
    fields.pop();
    let unchecked = preview(fields, Origin::Contents, "rsync");
    assert_eq!(unchecked.source_path, "/home/me/photos");
    assert!(!unchecked.contents);
}

#[test]
fn unrecognised_fields_do_not_reach_the_command() {
    let out = preview(
        [("command", "rsync -a"), ("src", "/x"), ("dest[path]", "/y")],
        Origin::Other,
        "rsync",
    );
    assert_eq!(out.command, r#"rsync "/y""#);
}

#[test]
fn empty_request_is_just_the_program() {
    assert_eq!(build_command(&TransferRequest::default()), "rsync");
}
