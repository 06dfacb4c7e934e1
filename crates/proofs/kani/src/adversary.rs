//! Adversarial step generator

#[cfg(kani)]
use kani::any;
#[cfg(kani)]
use model_safety::{state::*, transitions::*};

#[derive(Clone, Copy)]
pub enum Step {
    Fund,
    Withdraw,
    CheaperWithdraw,
    UpdateAnswer,
    FeedOutage,
    FreezeTransfers,
    ReaderNoise,
}

#[cfg(kani)]
impl kani::Arbitrary for Step {
    fn any() -> Self {
        let choice: u8 = any();
        match choice % 7 {
            0 => Step::Fund,
            1 => Step::Withdraw,
            2 => Step::CheaperWithdraw,
            3 => Step::UpdateAnswer,
            4 => Step::FeedOutage,
            5 => Step::FreezeTransfers,
            _ => Step::ReaderNoise,
        }
    }
}

#[cfg(kani)]
pub fn adversary_step(s: State) -> State {
    if s.wallets.is_empty() {
        return s;
    }

    match any::<Step>() {
        Step::Fund => {
            let caller: u8 = any::<u8>() % (s.wallets.len() as u8);
            let x: u128 = (any::<u8>() as u128) % 100;
            fund(s, caller, x)
        }
        Step::Withdraw => {
            let caller: u8 = any();
            withdraw(s, caller)
        }
        Step::CheaperWithdraw => {
            let caller: u8 = any();
            cheaper_withdraw(s, caller)
        }
        Step::UpdateAnswer => {
            let answer: u128 = (any::<u8>() as u128) % 8;
            update_answer(s, answer)
        }
        Step::FeedOutage => feed_outage(s),
        Step::FreezeTransfers => freeze_transfers(s),
        Step::ReaderNoise => reader_noise(s),
    }
}
