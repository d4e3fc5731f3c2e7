use circq::{BufferConfig, GrowMode, RingBuffer, TypedRingBuffer, Value, ValueKind};

fn config(capacity: usize, grow_mode: GrowMode) -> BufferConfig {
    BufferConfig {
        capacity,
        grow_mode,
    }
}

/// Overwrite: 容量 25 のバッファに 26 本書くと最初の要素が追い出される
#[test]
fn overwrite_evicts_first_element_after_capacity_writes() {
    let mut buf = RingBuffer::with_config(config(25, GrowMode::Overwrite));
    buf.write(String::from("first"));
    for i in 0..24 {
        buf.write(format!("line-{i}"));
    }
    assert_eq!(buf.len(), 25);
    assert!(buf.contains("first"));

    buf.write(String::from("one-more"));
    assert_eq!(buf.len(), 25);
    assert!(!buf.contains("first"));
    assert!(buf.contains("one-more"));
}

#[test]
fn overwrite_retains_last_capacity_elements_in_order() {
    let mut buf = RingBuffer::with_config(config(8, GrowMode::Overwrite));
    for i in 0..40 {
        buf.write(i);
    }
    assert_eq!(buf.len(), 8);
    let drained: Vec<i32> = std::iter::from_fn(|| buf.read()).collect();
    assert_eq!(drained, (32..40).collect::<Vec<_>>());
}

/// Continuous: 容量 5 から 100 本書くと 160 まで倍増し、要素数は制限されない
#[test]
fn continuous_growth_from_five_to_a_hundred() {
    let mut buf = RingBuffer::with_config(config(5, GrowMode::Continuous));
    for i in 0..100 {
        buf.write(i);
    }
    assert_eq!(buf.len(), 100);
    assert_eq!(buf.capacity(), 160);

    for expected in 0..50 {
        assert_eq!(buf.read(), Some(expected));
    }
    assert_eq!(buf.len(), 50);

    for i in 100..150 {
        buf.write(i);
    }
    assert_eq!(buf.len(), 100);
    let remaining: Vec<i32> = buf.iter().copied().collect();
    assert_eq!(remaining, (50..150).collect::<Vec<_>>());
}

#[test]
fn length_tracks_writes_minus_reads() {
    let mut buf = RingBuffer::with_config(config(3, GrowMode::Continuous));
    let mut expected = 0usize;
    for round in 0..5 {
        for i in 0..4 {
            buf.write(round * 10 + i);
            expected += 1;
            assert_eq!(buf.len(), expected);
        }
        buf.read();
        expected -= 1;
        assert_eq!(buf.len(), expected);
    }
}

#[test]
fn typed_buffer_end_to_end() {
    let mut buf: TypedRingBuffer<Value> = TypedRingBuffer::new(config(4, GrowMode::Continuous));
    buf.write(Value::from(1)).unwrap();
    buf.write(Value::from("two")).unwrap();
    assert!(buf.set_element_type(ValueKind::Number).is_err());

    buf.clear();
    buf.set_element_type(ValueKind::Number).unwrap();
    for i in 0..6 {
        buf.write(Value::Integer(i)).unwrap();
    }
    assert_eq!(buf.capacity(), 8);
    assert!(buf.write(Value::from("nope")).is_err());
    assert_eq!(buf.len(), 6);
    // 表現が違っても数値として一致する
    assert!(buf.contains(&Value::Float(3.0)));
}
