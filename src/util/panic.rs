/// Runs the provided block, asserting that it panics. Evaluates to the panic message when it was a
/// string, so that tests can inspect it.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {{
        let payload = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ = $run;
        }))
        .expect_err($msg);
        match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => payload
                .downcast::<&'static str>()
                .map(|message| message.to_string())
                .unwrap_or_default(),
        }
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
