use std::io::Cursor;
use std::time::Duration;

use tango_types::{AppEvent, UiEvent};
use tango_ui::bridge::forward_lines;
use tokio::time::timeout;

use crate::controller::ChannelSet;

#[tokio::test]
async fn test_ui_events_cross_channel_in_order() {
    let channels = ChannelSet::new();
    let (tx, rx) = channels.ui_to_app;

    for i in 0..10 {
        tx.send(AppEvent::UiEvent(UiEvent::SelectOption(i)))
            .await
            .expect("send failed");
    }

    for i in 0..10 {
        let event = timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("timeout")
            .expect("recv failed");
        match event {
            AppEvent::UiEvent(UiEvent::SelectOption(n)) => assert_eq!(n, i),
            other => panic!("Wrong event type: {:?}", other),
        }
    }
}

#[tokio::test]
async fn test_input_thread_survives_invalid_utf8() {
    let (line_tx, line_rx) = kanal::bounded::<String>(4);
    let line_rx = line_rx.to_async();

    std::thread::spawn(move || {
        let input = Cursor::new(b"\xb3\xf8\n1\nw\n".to_vec());
        forward_lines(input, &line_tx);
    });

    let mut lines = Vec::new();
    for _ in 0..3 {
        match timeout(Duration::from_secs(2), line_rx.recv()).await {
            Ok(Ok(line)) => lines.push(line),
            Ok(Err(e)) => panic!("Channel error: {}", e),
            Err(_) => panic!("Timeout - line never arrived!"),
        }
    }
    assert_eq!(&lines[1..], ["1", "w"]);

    // Sender dropped at EOF, so the UI sees input closed
    let closed = timeout(Duration::from_secs(2), line_rx.recv()).await;
    assert!(matches!(closed, Ok(Err(_))));
}
