//! Clipboard bridge demo: read the system clipboard through the method channel.

use quizkit_bridge::{AppShell, GET_CLIPBOARD_IMAGE};
use quizkit_channel::{MethodCall, Payload};
use quizkit_clipboard::SystemClipboard;

#[tokio::main]
async fn main() {
    let shell = AppShell::launch(SystemClipboard::new());

    println!("Invoking {GET_CLIPBOARD_IMAGE}...");
    match shell
        .clipboard_channel()
        .invoke(MethodCall::new(GET_CLIPBOARD_IMAGE))
        .await
    {
        Ok(Payload::Bytes(bytes)) => {
            println!("Clipboard image received: {} PNG bytes", bytes.len());
            match std::fs::write("clipboard_image.png", &bytes) {
                Ok(()) => println!("Saved to clipboard_image.png"),
                Err(e) => println!("Failed to save image: {e}"),
            }
        }
        Ok(other) => println!("Unexpected payload: {other:?}"),
        Err(e) => println!("Bridge error: {e}"),
    }
}
