use super::{BeraClient, TxCall};
use crate::contracts::{BeraNames, RegisterCall};
use crate::error::ActivityError;
use anyhow::{Context, Result};
use ethers::abi::AbiEncode;
use ethers::prelude::*;
use rand::Rng;
use tracing::debug;

const NAME_ATTEMPTS: u32 = 5;
const NAME_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Random lowercase name of 8 to 12 characters, starting with a letter.
pub fn random_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.gen_range(8..=12);
    let mut name = String::with_capacity(len);
    name.push(char::from(NAME_CHARSET[rng.gen_range(0..26)]));
    for _ in 1..len {
        name.push(char::from(NAME_CHARSET[rng.gen_range(0..NAME_CHARSET.len())]));
    }
    name
}

impl<P: JsonRpcClient + Clone + 'static> BeraClient<P> {
    /// Registers a random free name to the wallet, paying the quoted price.
    pub async fn create_bera_name(&self, wallet: &LocalWallet) -> Result<(String, TxHash)> {
        let owner = wallet.address();
        let registry = BeraNames::new(self.contracts.bera_names, self.provider.clone());

        let balance = self.native_balance(owner).await?;
        self.require_balance(self.contracts.wbera, balance, U256::zero())?;

        for _ in 0..NAME_ATTEMPTS {
            let name = random_name(&mut rand::thread_rng());
            let free = registry
                .available(name.clone())
                .call()
                .await
                .context("Failed to query name availability")?;
            if !free {
                debug!("Bera name {} taken", name);
                continue;
            }

            let price = registry
                .price_of(name.clone())
                .call()
                .await
                .context("Failed to query name price")?;
            self.require_balance(self.contracts.wbera, balance, price)?;

            let data = RegisterCall {
                name: name.clone(),
                owner,
            }
            .encode();
            let call = TxCall::to(self.contracts.bera_names, data)
                .value(price)
                .gas(self.gas.limit_contract_call(), self.gas.call_price_pct());
            let hash = self.submit(wallet, call).await?;
            return Ok((name, hash));
        }

        Err(ActivityError::NameUnavailable {
            attempts: NAME_ATTEMPTS,
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_name_shape() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let name = random_name(&mut rng);
            assert!((8..=12).contains(&name.len()));
            assert!(name.chars().next().unwrap().is_ascii_lowercase());
            assert!(name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }
}
