use std::io::BufRead;

use kanal::{AsyncReceiver, Sender};

/// Read stdin on a dedicated thread so a pending read never holds up runtime shutdown.
/// The receiver closes on EOF or read error.
pub fn spawn_stdin_reader() -> AsyncReceiver<String> {
    let (line_tx, line_rx) = kanal::bounded::<String>(16);

    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        forward_lines(stdin.lock(), &line_tx);
        tracing::debug!("[UI] stdin reader stopping");
    });

    line_rx.to_async()
}

/// Send every line of `reader` until EOF, a read error, or a closed receiver.
///
/// Lines that are not valid UTF-8 are decoded lossily instead of ending input,
/// so a stray byte from a non-UTF-8 terminal only garbles that one line.
pub fn forward_lines<R: BufRead>(mut reader: R, line_tx: &Sender<String>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => {
                tracing::error!("[UI] Failed to read stdin: {}", e);
                break;
            }
        }

        let line = match String::from_utf8(buf.clone()) {
            Ok(line) => line,
            Err(_) => {
                tracing::warn!("[UI] Input line is not valid UTF-8, decoding lossily");
                String::from_utf8_lossy(&buf).into_owned()
            }
        };
        let line = line.trim_end_matches(['\n', '\r']).to_string();

        if line_tx.send(line).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn collect(input: &[u8]) -> Vec<String> {
        let (tx, rx) = kanal::bounded::<String>(16);
        forward_lines(Cursor::new(input.to_vec()), &tx);
        drop(tx);
        let mut lines = Vec::new();
        while let Ok(line) = rx.recv() {
            lines.push(line);
        }
        lines
    }

    #[test]
    fn test_lines_after_invalid_utf8_still_arrive() {
        let lines = collect(b"\xb3\xf8\n1\nw\n");
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains('\u{FFFD}'));
        assert_eq!(lines[1], "1");
        assert_eq!(lines[2], "w");
    }

    #[test]
    fn test_crlf_and_missing_final_newline() {
        assert_eq!(collect(b"d 1\r\nq"), vec!["d 1", "q"]);
    }

    #[test]
    fn test_utf8_line_is_kept() {
        assert_eq!(collect("錯題本\n".as_bytes()), vec!["錯題本"]);
    }

    #[test]
    fn test_stops_when_receiver_closed() {
        let (tx, rx) = kanal::bounded::<String>(16);
        drop(rx);
        // Returns instead of looping over the remaining input
        forward_lines(Cursor::new(b"1\n2\n3\n".to_vec()), &tx);
    }
}
