//! Failure cleanup: a decode that fails part-way must release everything it
//! built. Live heap bytes are counted per thread by a wrapping allocator.

use ordjson::{decode, encode, EncodeError, Pair, Value};
use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

struct CountingAlloc;

thread_local! {
    static LIVE_BYTES: Cell<isize> = const { Cell::new(0) };
}

fn adjust(delta: isize) {
    // `try_with` keeps the allocator usable while thread-locals are torn down.
    let _ = LIVE_BYTES.try_with(|live| live.set(live.get() + delta));
}

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            adjust(layout.size() as isize);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        adjust(-(layout.size() as isize));
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = System.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            adjust(new_size as isize - layout.size() as isize);
        }
        new_ptr
    }
}

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

fn live_bytes() -> isize {
    LIVE_BYTES.with(Cell::get)
}

const BROKEN_INPUTS: &[&str] = &[
    r#"{"a":1,"b":"#,
    "[1,2",
    r#"[{"k":[1,2,{"deep":"str"#,
    r#"{"a":[1,2,3],"a":null}"#,
    r#"{"a":{"b":{"c":[true, fals]}}}"#,
    r#"["ok", "bad \q escape"]"#,
    r#"{"list": [1, 2, 3] "missing": "comma"}"#,
    r#"[1e400, -]"#,
];

// Everything lives in one test so no other test shares the thread's counter
// while it is being measured.
#[test]
fn test_decode_failures_release_everything() {
    // Warm-up: the first pass may make one-time allocations (log callsite
    // registration and the like) that are never freed.
    for input in BROKEN_INPUTS {
        assert!(decode(input.as_bytes()).is_err());
    }

    for input in BROKEN_INPUTS {
        let before = live_bytes();
        let result = decode(input.as_bytes());
        assert!(result.is_err(), "{input} should fail");
        drop(result);
        assert_eq!(live_bytes(), before, "leak after failing on {input}");
    }

    // Successful decode + encode + drop also returns to the baseline.
    let document = br#"{"b":[1,2,{"x":"y"}],"a":{"nested":[[],{}]},"c":"\u00e9"}"#;
    let _ = decode(document).map(|value| {
        let mut out = Vec::new();
        let _ = encode(&mut out, &value);
    });

    let before = live_bytes();
    let value: Value = decode(document).unwrap();
    let mut out = Vec::new();
    encode(&mut out, &value).unwrap();
    drop(out);
    drop(value);
    assert_eq!(live_bytes(), before);

    // An encode that fails part-way through an object releases its
    // traversal stack; only the caller's buffer and value remain.
    let mut inner = Value::new_array();
    inner.array_add(Value::Number(f64::NAN)).unwrap();
    let mut object = Value::new_object();
    object.object_add(Pair::new("a", inner)).unwrap();
    object.object_add(Pair::new("b", Value::Null)).unwrap();
    let mut out = Vec::new();
    let _ = encode(&mut out, &object);

    let before = live_bytes();
    let mut out = Vec::new();
    let err = encode(&mut out, &object).unwrap_err();
    assert!(matches!(err, EncodeError::NonFiniteNumber(n) if n.is_nan()));
    drop(out);
    assert_eq!(live_bytes(), before);
}
