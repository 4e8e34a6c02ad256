#![no_main]
use libfuzzer_sys::fuzz_target;

use inetpton_core::inet::inet_pton;
use inetpton_core::socket::{AF_INET, AF_INET6};

const FILL: u8 = 0xA5;

fuzz_target!(|data: &[u8]| {
    for (af, len) in [(AF_INET, 4usize), (AF_INET6, 16usize)] {
        let mut dst = [FILL; 20];
        let rc = inet_pton(af, data, &mut dst);
        assert!(rc == 0 || rc == 1, "rc {rc} for supported family");

        // Bytes past the address are never touched; a failure touches nothing.
        assert!(dst[len..].iter().all(|&b| b == FILL));
        if rc == 0 {
            assert!(dst.iter().all(|&b| b == FILL));
        }

        if rc == 1 && af == AF_INET6 {
            // Re-rendering through std and parsing again is stable, unless std
            // chooses a dotted suffix.
            let mut octets = [0u8; 16];
            octets.copy_from_slice(&dst[..16]);
            let text = std::net::Ipv6Addr::from(octets).to_string();
            if !text.contains('.') {
                let mut again = [0u8; 16];
                assert_eq!(inet_pton(AF_INET6, text.as_bytes(), &mut again), 1);
                assert_eq!(again, octets);
            }
        }
    }

    // Canonical dotted quads agree with std.
    let text = match data.iter().position(|&b| b == 0) {
        Some(nul) => &data[..nul],
        None => data,
    };
    if let Ok(s) = std::str::from_utf8(text) {
        let mut dst = [0u8; 4];
        let ours = inet_pton(AF_INET, text, &mut dst) == 1;
        match s.parse::<std::net::Ipv4Addr>() {
            Ok(addr) => {
                assert!(ours, "std accepted {s:?}");
                assert_eq!(dst, addr.octets());
            }
            Err(_) => assert!(!ours, "std rejected {s:?}"),
        }
    }
});
