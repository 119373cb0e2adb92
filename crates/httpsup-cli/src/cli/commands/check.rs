//! `httpsup check <url>...` – print upgrade decisions without dialing.

use httpsup_core::policy::UpgradePolicy;

pub fn run_check(policy: &UpgradePolicy, urls: &[String]) {
    for url in urls {
        let enforced = policy.enforce(url);
        if enforced == *url {
            println!("{url} (unchanged)");
        } else {
            println!("{url} -> {enforced}");
        }
    }
}
