//! Panics that were not thrown must cross every recovery scope unchanged.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex};

use thrower::{is_thrown, recover, recover_into, recover_or_default, throw_msg, Error};

/// Run `f` under an outer safety net and return the payload that reached it.
fn escaped<F: FnOnce()>(f: F) -> Box<dyn Any + Send> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(()) => panic!("expected a panic to escape"),
        Err(payload) => payload,
    }
}

/// Payload with an identity token.
struct Foreign(Arc<()>);

#[test]
fn foreign_panic_passes_through_recover() {
    let payload = escaped(|| {
        let _ = recover(|| -> () { panic!("genuine bug") });
        unreachable!("recover swallowed a foreign panic");
    });
    assert!(!is_thrown(&*payload));
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"genuine bug"));
}

#[test]
fn out_of_bounds_passes_through_and_leaves_slot_alone() {
    let mut err: Option<Error> = None;
    let payload = escaped(|| {
        let v = vec![1, 2, 3];
        let idx = v.len() + 4;
        recover_into(Some(&mut err), || v[idx]);
    });

    let msg = payload.downcast_ref::<String>().expect("formatted panic message");
    assert!(msg.contains("index out of bounds"), "{msg}");
    assert!(err.is_none());
}

#[test]
fn payload_identity_survives_many_scopes() {
    let token = Arc::new(());
    let inner = token.clone();

    let payload = escaped(move || {
        let _ = recover(|| {
            let _ = recover_into(None, || {
                let _: u8 = recover_or_default(|| {
                    let _ = recover(|| -> () { panic::panic_any(Foreign(inner)) });
                    1
                });
            });
        });
    });

    let foreign = payload.downcast::<Foreign>().ok().expect("Foreign payload");
    assert!(Arc::ptr_eq(&foreign.0, &token));
}

#[test]
fn discard_mode_does_not_swallow_foreign_panics() {
    let payload = escaped(|| {
        let _ = recover_into(None, || -> () { panic::panic_any(404_u16) });
    });
    assert_eq!(payload.downcast_ref::<u16>(), Some(&404));
}

#[test]
fn resumed_foreign_panic_keeps_unwinding_to_outer_scopes() {
    let outer_ran_after = Arc::new(Mutex::new(false));
    let flag = outer_ran_after.clone();

    let payload = escaped(move || {
        let _ = recover(|| {
            let _ = recover(|| -> () { panic::panic_any("deep") });
            *flag.lock().unwrap() = true;
        });
    });

    assert_eq!(payload.downcast_ref::<&str>(), Some(&"deep"));
    assert!(!*outer_ran_after.lock().unwrap());
}

#[test]
fn throw_is_recovered_while_a_foreign_panic_unwinds() {
    struct RecoversOnDrop(Arc<Mutex<Option<String>>>);

    impl Drop for RecoversOnDrop {
        fn drop(&mut self) {
            let recovered = recover(|| -> () { throw_msg("thrown during cleanup") });
            *self.0.lock().unwrap() = recovered.err().map(|e| e.to_string());
        }
    }

    let seen = Arc::new(Mutex::new(None));
    let guard_slot = seen.clone();

    let payload = escaped(move || {
        let _guard = RecoversOnDrop(guard_slot);
        panic::panic_any("outer bug");
    });

    // The foreign panic still arrives, and the throw inside the destructor
    // was consumed there.
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"outer bug"));
    assert_eq!(seen.lock().unwrap().as_deref(), Some("thrown during cleanup"));
}

#[test]
fn escaped_throw_is_distinguishable_by_an_outer_handler() {
    let payload = escaped(|| throw_msg("nobody recovered me"));
    assert!(is_thrown(&*payload));
    assert!(payload.downcast_ref::<Error>().is_none());
}
