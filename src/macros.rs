/// Log an error at `error` level and evaluate to `Err(error)`
#[macro_export]
macro_rules! log_and_err {
    ($err:expr) => {{
        let err = $err;
        log::error!("{}", err);
        Err(err)
    }};
}
