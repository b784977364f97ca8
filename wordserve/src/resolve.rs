use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use bytes::BytesMut;
use tokio::net::UdpSocket;

// https://datatracker.ietf.org/doc/html/rfc1035#section-4.2.1
//
// Messages carried by UDP are restricted to 512 bytes (not counting the IP
// or UDP headers).
const MAX_RESPONSE_SIZE: usize = 512;

/// Ask the upstream server for `domain` and return its first IPv4 address.
pub async fn resolve_v4(
    server_addr: SocketAddr,
    domain: &str,
) -> std::io::Result<Option<Ipv4Addr>> {
    tracing::debug!("resolving domain: {}", domain);

    let request_bytes = dns::encode_request(domain)?;

    let local_addr = SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 0);
    let sock = UdpSocket::bind(local_addr).await?;

    let _send_size = sock.send_to(&request_bytes, server_addr).await?;

    let mut resp_buf = BytesMut::with_capacity(MAX_RESPONSE_SIZE);
    let response_size = sock.recv_buf(&mut resp_buf).await?;
    let response_bytes = &resp_buf[0..response_size];
    tracing::debug!("received udp response, length: {}", response_size);

    let resp = dns::decode_response(response_bytes)?;

    match resp.first_v4_address() {
        None => {
            tracing::debug!("upstream response carried no IPv4 answers");
            Ok(None)
        }
        Some(octets) => Ok(Some(Ipv4Addr::from(octets))),
    }
}
