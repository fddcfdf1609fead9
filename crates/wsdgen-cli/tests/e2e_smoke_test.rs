//! End-to-end tests driving `run` the way the binary does, with the service
//! endpoint pointed at a canned-response HTTP stub.

use std::{
    fs,
    io::{Read, Write},
    net::TcpListener,
    path::Path,
    thread,
};

use clap::Parser;
use clap::error::ErrorKind;
use tempfile::tempdir;

use wsdgen_cli::{Args, exit_code, run};

const PNG_PAYLOAD: &[u8] = b"\x89PNG\r\n\x1a\nstub image bytes";

/// Serves the given canned responses, one per connection.
fn serve(responses: Vec<Vec<u8>>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
    let endpoint = format!("http://{}", listener.local_addr().expect("local addr"));

    thread::spawn(move || {
        for response in responses {
            let (mut stream, _) = listener.accept().expect("accept connection");
            consume_request(&mut stream);
            stream.write_all(&response).expect("write response");
        }
    });

    endpoint
}

/// Reads and discards one HTTP/1.1 request (head plus Content-Length body).
fn consume_request(stream: &mut std::net::TcpStream) {
    let mut head = Vec::new();
    let mut byte = [0u8; 1];
    while !head.ends_with(b"\r\n\r\n") {
        let read = stream.read(&mut byte).expect("read request head");
        if read == 0 {
            return;
        }
        head.extend_from_slice(&byte);
    }

    let head = String::from_utf8_lossy(&head).into_owned();
    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse::<usize>().ok()
            } else {
                None
            }
        })
        .unwrap_or(0);

    let mut body = vec![0u8; content_length];
    stream.read_exact(&mut body).expect("read request body");
}

fn http_response(status_line: &str, content_type: &str, body: &[u8]) -> Vec<u8> {
    let mut response = format!(
        "HTTP/1.1 {status_line}\r\n\
         Content-Type: {content_type}\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\r\n",
        body.len()
    )
    .into_bytes();
    response.extend_from_slice(body);
    response
}

/// Writes a config file routing requests to the stub endpoint.
fn write_stub_config(dir: &Path, endpoint: &str) -> String {
    let path = dir.join("config.toml");
    fs::write(&path, format!("[service]\nendpoint = \"{endpoint}\"\n")).expect("write config");
    path.to_string_lossy().to_string()
}

fn stub_args(input: &Path, output: &Path, config: String) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: Some(config),
        log_level: "off".to_string(),
    }
}

#[test]
fn missing_input_file_maps_to_exit_code_3() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    // No stub server: the input check must short-circuit before any request
    let args = Args {
        input: temp_dir
            .path()
            .join("does-not-exist.wsd")
            .to_string_lossy()
            .to_string(),
        output: temp_dir.path().join("out.png").to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
    };

    let err = run(&args).expect_err("run should fail");
    assert_eq!(exit_code(&err), 3);
    assert!(
        !temp_dir.path().join("out.png").exists(),
        "no output file may be written"
    );
}

#[test]
fn zero_arguments_are_a_clap_usage_error() {
    let err = Args::try_parse_from(["wsdgen"]).expect_err("parse should fail");
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn output_path_defaults_to_credit_check_diagram() {
    let args = Args::try_parse_from(["wsdgen", "diagram.wsd"]).expect("parse should succeed");
    assert_eq!(args.output, "credit-check-diagram.png");
}

#[test]
fn successful_render_writes_payload_bytes() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let endpoint = serve(vec![http_response("200 OK", "image/png", PNG_PAYLOAD)]);

    let input = temp_dir.path().join("diagram.wsd");
    fs::write(&input, "Alice->Bob: Authentication Request\n").expect("write input");
    let output = temp_dir.path().join("diagram.png");
    let config = write_stub_config(temp_dir.path(), &endpoint);

    run(&stub_args(&input, &output, config)).expect("run should succeed");

    assert_eq!(fs::read(&output).expect("read output"), PNG_PAYLOAD);
}

#[test]
fn raw_text_response_is_written_verbatim() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let endpoint = serve(vec![http_response(
        "200 OK",
        "text/plain",
        b"unexpected but harmless",
    )]);

    let input = temp_dir.path().join("diagram.wsd");
    fs::write(&input, "Alice->Bob: hi\n").expect("write input");
    let output = temp_dir.path().join("diagram.png");
    let config = write_stub_config(temp_dir.path(), &endpoint);

    run(&stub_args(&input, &output, config)).expect("run should succeed");

    assert_eq!(
        fs::read(&output).expect("read output"),
        b"unexpected but harmless"
    );
}

#[test]
fn service_reported_errors_map_to_exit_code_7() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let endpoint = serve(vec![http_response(
        "200 OK",
        "text/html",
        b"{img: \"\", errors: [syntax error on line 3]}",
    )]);

    let input = temp_dir.path().join("diagram.wsd");
    fs::write(&input, "Alice=>X\n").expect("write input");
    let output = temp_dir.path().join("diagram.png");
    let config = write_stub_config(temp_dir.path(), &endpoint);

    let err = run(&stub_args(&input, &output, config)).expect_err("run should fail");
    assert_eq!(exit_code(&err), 7);
    assert!(
        !output.exists(),
        "no output file may be written for reported errors"
    );
}

#[test]
fn reruns_produce_byte_identical_outputs() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let input = temp_dir.path().join("diagram.wsd");
    fs::write(&input, "Alice->Bob: hi\n").expect("write input");

    let mut outputs = Vec::new();
    for name in ["first.png", "second.png"] {
        let endpoint = serve(vec![http_response("200 OK", "image/png", PNG_PAYLOAD)]);
        let output = temp_dir.path().join(name);
        let config = write_stub_config(temp_dir.path(), &endpoint);

        run(&stub_args(&input, &output, config)).expect("run should succeed");
        outputs.push(fs::read(&output).expect("read output"));
    }

    assert_eq!(outputs[0], outputs[1]);
}
