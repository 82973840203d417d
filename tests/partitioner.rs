use chring::{DefaultPartitioner, Md5Partitioner, Partitioner, Xxh3Partitioner};

#[test]
fn md5_positions() {
    // MD5 digests interpreted as big-endian 128-bit integers; reference
    // values computed with the md5sum utility.
    let partitioner = Md5Partitioner::new();
    assert_eq!(partitioner.position(b"a:0"), 0x1311656a4fbf190b4e6e29841876fae2);
    assert_eq!(partitioner.position(b"a:1"), 0x9ef12b2e76052ea01bf394a79518fe90);
    assert_eq!(
        partitioner.position(b"node-1:0"),
        0x5e8e87030a23e2d71017832862878a01
    );
    assert_eq!(
        partitioner.position(b"node-1:99"),
        0xb591cca2bfcb473e78a57998b951123f
    );
    assert_eq!(
        partitioner.position(b"hello world"),
        0x5eb63bbbe01eeed093cb22bb8f5acdc3
    );
    assert_eq!(
        partitioner.position(b"some key"),
        0xcd52951f7c0dc0850f2c6c9cb7be9474
    );
    assert_eq!(partitioner.position(b""), 0xd41d8cd98f00b204e9800998ecf8427e);
}

#[test]
fn xxh3_positions_are_stable() {
    let partitioner = Xxh3Partitioner::new();
    for key in [&b"a:0"[..], b"node-1:42", b"hello world", b""] {
        assert_eq!(partitioner.position(key), partitioner.position(key));
        assert_eq!(partitioner.position(key), Xxh3Partitioner::new().position(key));
    }
    assert_ne!(partitioner.position(b"a:0"), partitioner.position(b"a:1"));
}

#[test]
fn default_partitioner_is_xxh3() {
    let default = DefaultPartitioner::new();
    let xxh3 = Xxh3Partitioner::new();
    for key in [&b"a:0"[..], b"node-1:42", b"hello world"] {
        assert_eq!(default.position(key), xxh3.position(key));
    }
}
