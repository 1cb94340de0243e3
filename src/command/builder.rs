use super::request::TransferRequest;

pub const PROGRAM: &str = "rsync";

/// Build the rsync command line for `request`.
pub fn build_command(request: &TransferRequest) -> String {
    build_command_for(PROGRAM, request)
}

/// Same as [`build_command`] with a caller supplied program name.
pub fn build_command_for(program: &str, request: &TransferRequest) -> String {
    let settings = &request.settings;
    let mut parts: Vec<String> = Vec::new();

    // -z compress, -a archive (-rlptgoD), -r recursive, -d dirs without recursing
    let switches: String = [
        (settings.compress, 'z'),
        (settings.archive, 'a'),
        (settings.recursive, 'r'),
        (settings.dirs, 'd'),
    ]
    .into_iter()
    .filter(|(on, _)| *on)
    .map(|(_, letter)| letter)
    .collect();
    if !switches.is_empty() {
        parts.push(format!("-{switches}"));
    }

    if !settings.port.is_empty() {
        parts.push(format!(r#"-e "ssh -p {}""#, settings.port));
    }

    if settings.delete_extraneous {
        parts.push("--delete".to_string());
    }

    for pattern in request.exclude.to_vec() {
        parts.push(format!(r#"--exclude "{pattern}""#));
    }
    for pattern in request.include.to_vec() {
        parts.push(format!(r#"--include "{pattern}""#));
    }

    parts.extend(request.source.token());
    parts.extend(request.destination.token());

    std::iter::once(program.to_string())
        .chain(parts.into_iter().filter(|part| !part.is_empty()))
        .collect::<Vec<_>>()
        .join(" ")
}
