//! Integration tests for connection lifecycle: registration, QUIT,
//! disconnects and transport-level commands.

mod common;

use common::{TestClient, TestServer};
use std::time::Duration;

/// Read until the server closes (or resets) the connection.
async fn wait_closed(client: &mut TestClient) {
    for _ in 0..100 {
        if let Err(e) = client.recv().await {
            if e.downcast_ref::<tokio::time::error::Elapsed>().is_some() {
                panic!("timed out waiting for close");
            }
            return;
        }
    }
    panic!("connection was not closed");
}

async fn who(client: &mut TestClient, room: &str) -> Vec<String> {
    client.send_raw(&format!("WHO {room}")).await.unwrap();
    client.recv_until(|l| l.contains(" 315 ")).await.unwrap()
}

#[tokio::test]
async fn test_welcome_burst() {
    let server = TestServer::spawn().await.expect("Failed to spawn test server");
    let mut client = server.connect().await.unwrap();

    client.send_raw("NICK alice").await.unwrap();
    let burst = client.recv_until(|l| l.contains(" 422 ")).await.unwrap();
    let codes: Vec<&str> = burst
        .iter()
        .map(|l| l.split(' ').nth(1).unwrap_or_default())
        .collect();
    assert_eq!(codes, vec!["001", "002", "003", "004", "422"]);
    assert!(burst[0].starts_with(":test.server 001 alice :Welcome to the Internet Relay Network alice!"));
    assert!(burst[3].ends_with(" aio beIikntPpTl"));
}

#[tokio::test]
async fn test_nickname_conflict() {
    let server = TestServer::spawn().await.expect("Failed to spawn test server");
    let _x = server.register("alice").await.unwrap();
    let mut y = server.connect().await.unwrap();

    y.send_raw("NICK alice").await.unwrap();
    assert_eq!(
        y.recv().await.unwrap(),
        ":test.server 433 * alice :Nickname is already in use"
    );

    // Y is still unnamed and can pick another nickname
    y.send_raw("NICK bob").await.unwrap();
    assert!(y.recv().await.unwrap().starts_with(":test.server 001 bob "));
}

#[tokio::test]
async fn test_quit_removes_session() {
    let server = TestServer::spawn().await.expect("Failed to spawn test server");
    let mut alice = server.register("alice").await.unwrap();
    let mut bob = server.register("bob").await.unwrap();
    alice.join("#test").await.unwrap();
    bob.join("#test").await.unwrap();
    alice.recv().await.unwrap();

    bob.send_raw("QUIT :bye").await.unwrap();
    wait_closed(&mut bob).await;

    let lines = who(&mut alice, "#test").await;
    assert_eq!(lines.len(), 2);
    assert!(!lines.iter().any(|l| l.contains(" bob ")));

    // The nickname is free again
    let mut carol = server.connect().await.unwrap();
    carol.send_raw("NICK bob").await.unwrap();
    assert!(carol.recv().await.unwrap().starts_with(":test.server 001 bob "));
}

#[tokio::test]
async fn test_command_before_quit_is_processed() {
    let server = TestServer::spawn().await.expect("Failed to spawn test server");
    let mut alice = server.register("alice").await.unwrap();
    let mut bob = server.register("bob").await.unwrap();
    alice.join("#test").await.unwrap();
    bob.join("#test").await.unwrap();
    alice.recv().await.unwrap();

    bob.send_raw("PRIVMSG #test :last words").await.unwrap();
    bob.send_raw("QUIT").await.unwrap();
    assert_eq!(
        alice.recv().await.unwrap(),
        ":bob!bob@localhost PRIVMSG #test :last words"
    );
}

#[tokio::test]
async fn test_dropped_connection_removes_session() {
    let server = TestServer::spawn().await.expect("Failed to spawn test server");
    let mut alice = server.register("alice").await.unwrap();
    let mut bob = server.register("bob").await.unwrap();
    alice.join("#test").await.unwrap();
    bob.join("#test").await.unwrap();
    alice.recv().await.unwrap();

    drop(bob);

    // Removal is asynchronous; poll WHO until bob is gone
    for _ in 0..50 {
        let lines = who(&mut alice, "#test").await;
        if !lines.iter().any(|l| l.contains(" bob ")) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    panic!("bob still listed after disconnect");
}

#[tokio::test]
async fn test_ping_and_unknown_command() {
    let server = TestServer::spawn().await.expect("Failed to spawn test server");
    let mut client = server.connect().await.unwrap();

    client.send_raw("PING :abc").await.unwrap();
    assert_eq!(
        client.recv().await.unwrap(),
        ":test.server PONG test.server :abc"
    );

    client.send_raw("PONG :test.server").await.unwrap();
    client.send_raw("").await.unwrap();
    client.send_raw("FOO bar").await.unwrap();
    assert_eq!(
        client.recv().await.unwrap(),
        ":test.server NOTICE * :Invalid command"
    );
}

#[tokio::test]
async fn test_overlong_line_closes_connection() {
    let server = TestServer::spawn().await.expect("Failed to spawn test server");
    let mut client = server.register("alice").await.unwrap();

    let long = format!("PRIVMSG alice :{}", "x".repeat(600));
    client.send_raw(&long).await.unwrap();
    wait_closed(&mut client).await;

    // The session is gone, so the nickname is free
    let mut other = server.connect().await.unwrap();
    for _ in 0..50 {
        other.send_raw("NICK alice").await.unwrap();
        if other.recv().await.unwrap().contains(" 001 ") {
            return;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    panic!("nickname not released");
}
