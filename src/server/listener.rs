// Reusable listener module
// Creates the TCP listener with SO_REUSEADDR so a restart immediately after
// a crash does not fail while the old socket sits in TIME_WAIT.

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

/// Create a `TcpListener` with `SO_REUSEADDR` enabled.
///
/// A second live listener on the same port still fails with `AddrInUse`;
/// reuse only covers the TIME_WAIT window left behind by a previous process.
pub fn create_reusable_listener(addr: std::net::SocketAddr) -> std::io::Result<TcpListener> {
    // Create socket with appropriate domain (IPv4 or IPv6)
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    socket.set_reuse_address(true)?;

    // Set non-blocking mode for async compatibility
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    // Convert socket2::Socket to std::net::TcpListener, then to tokio::net::TcpListener
    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn second_listener_on_same_port_fails_with_addr_in_use() {
        let first = create_reusable_listener("127.0.0.1:0".parse().unwrap())
            .expect("first bind should succeed");
        let addr = first.local_addr().expect("local addr");

        let second = create_reusable_listener(addr);

        match second {
            Err(e) => assert_eq!(e.kind(), std::io::ErrorKind::AddrInUse),
            Ok(_) => panic!("second bind unexpectedly succeeded"),
        }
    }
}
