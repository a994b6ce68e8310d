//! Boot stages as a typestate machine

use crate::report::collect_results;
use crate::{Cpu, GeneratedLogic, BANNER};
use core::marker::PhantomData;
use fuse_console::{Console, Surface};

/// Boot stage, for logging and inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Boot,
    Initializing,
    Rendering,
    Idle,
}

mod sealed {
    pub trait Sealed {}
}

/// Marker for a boot stage
pub trait State: sealed::Sealed {
    const STAGE: Stage;
}

/// Entered by the platform loader, nothing initialized yet
pub struct Boot;

/// Console is up and the banner has been printed
pub struct Initializing;

/// Generated logic has run and its results are on screen
pub struct Rendering;

/// Terminal stage: only `halt` is left
pub struct Idle;

macro_rules! impl_state {
    ($($ty:ident),*) => {
        $(
            impl sealed::Sealed for $ty {}
            impl State for $ty {
                const STAGE: Stage = Stage::$ty;
            }
        )*
    };
}

impl_state!(Boot, Initializing, Rendering, Idle);

/// The kernel, owning the only console, in stage `St`
pub struct Kernel<S: Surface, St: State> {
    console: Console<S>,
    _stage: PhantomData<St>,
}

impl<S: Surface, St: State> Kernel<S, St> {
    pub fn stage(&self) -> Stage {
        St::STAGE
    }

    pub fn console(&self) -> &Console<S> {
        &self.console
    }

    fn advance<Next: State>(self) -> Kernel<S, Next> {
        log::info!("kernel: {:?} -> {:?}", St::STAGE, Next::STAGE);
        Kernel {
            console: self.console,
            _stage: PhantomData,
        }
    }
}

impl<S: Surface> Kernel<S, Boot> {
    /// Kernel in the `Boot` stage, bound to `surface`
    pub fn new(surface: S) -> Self {
        Self {
            console: Console::new(surface),
            _stage: PhantomData,
        }
    }

    /// Reset the console and print the banner
    pub fn initialize(self) -> Kernel<S, Initializing> {
        let mut kernel = self.advance::<Initializing>();
        kernel.console.initialize();
        kernel.console.write_line(BANNER);
        kernel
    }
}

impl<S: Surface> Kernel<S, Initializing> {
    /// Call the generated logic and print one labeled line per result
    pub fn render<L: GeneratedLogic + ?Sized>(self, logic: &L) -> Kernel<S, Rendering> {
        let mut kernel = self.advance::<Rendering>();
        for result in collect_results(logic).iter() {
            log::debug!("kernel: {:?} = {:?}", result.label, result.value);
            result.render(&mut kernel.console);
        }
        kernel
    }
}

impl<S: Surface> Kernel<S, Rendering> {
    /// Enter the terminal stage
    pub fn idle(self) -> Kernel<S, Idle> {
        self.advance::<Idle>()
    }
}

impl<S: Surface> Kernel<S, Idle> {
    /// Wait for interrupts forever
    ///
    /// Every wake-up goes straight back to the low-power wait. There is no
    /// caller to return to.
    pub fn halt<C: Cpu + ?Sized>(self, cpu: &C) -> ! {
        log::info!("kernel: halting");
        loop {
            cpu.wait_for_interrupt();
        }
    }
}
