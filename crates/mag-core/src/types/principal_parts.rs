// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::Deserialize;

use crate::types::nullable_int;
use crate::types::nullable_string;

/// The principal parts of one verb, keyed by the dataset's short names.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Parts {
    #[serde(deserialize_with = "nullable_string")]
    pub pr: String,
    #[serde(deserialize_with = "nullable_string")]
    pub fu: String,
    #[serde(deserialize_with = "nullable_string")]
    pub ao: String,
    #[serde(deserialize_with = "nullable_string")]
    pub pf: String,
    #[serde(deserialize_with = "nullable_string")]
    pub pm: String,
    #[serde(deserialize_with = "nullable_string")]
    pub ap: String,
}

impl Parts {
    pub fn get(&self, part: PrincipalPart) -> &str {
        match part {
            PrincipalPart::Present => &self.pr,
            PrincipalPart::Future => &self.fu,
            PrincipalPart::Aorist => &self.ao,
            PrincipalPart::Perfect => &self.pf,
            PrincipalPart::PerfectMiddle => &self.pm,
            PrincipalPart::AoristPassive => &self.ap,
        }
    }

    /// The non-empty parts, in principal part order.
    pub fn present_parts(&self) -> impl Iterator<Item = (PrincipalPart, &str)> {
        PrincipalPart::ALL
            .into_iter()
            .map(|part| (part, self.get(part)))
            .filter(|(_, form)| !form.is_empty())
    }
}

/// The principal parts introduced in one unit.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct UnitPP {
    #[serde(deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(deserialize_with = "nullable_int")]
    pub unit: i64,
    pub pp: Vec<Parts>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PrincipalPart {
    Present,
    Future,
    Aorist,
    Perfect,
    PerfectMiddle,
    AoristPassive,
}

impl PrincipalPart {
    pub const ALL: [PrincipalPart; 6] = [
        PrincipalPart::Present,
        PrincipalPart::Future,
        PrincipalPart::Aorist,
        PrincipalPart::Perfect,
        PrincipalPart::PerfectMiddle,
        PrincipalPart::AoristPassive,
    ];

    /// The traditional number of the part, from 1 (present) to 6 (aorist
    /// passive).
    pub fn number(self) -> u8 {
        match self {
            PrincipalPart::Present => 1,
            PrincipalPart::Future => 2,
            PrincipalPart::Aorist => 3,
            PrincipalPart::Perfect => 4,
            PrincipalPart::PerfectMiddle => 5,
            PrincipalPart::AoristPassive => 6,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        PrincipalPart::ALL.into_iter().find(|p| p.number() == number)
    }

    /// The dataset field name.
    pub fn key(self) -> &'static str {
        match self {
            PrincipalPart::Present => "pr",
            PrincipalPart::Future => "fu",
            PrincipalPart::Aorist => "ao",
            PrincipalPart::Perfect => "pf",
            PrincipalPart::PerfectMiddle => "pm",
            PrincipalPart::AoristPassive => "ap",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PrincipalPart::Present => "Present",
            PrincipalPart::Future => "Future",
            PrincipalPart::Aorist => "Aorist",
            PrincipalPart::Perfect => "Perfect",
            PrincipalPart::PerfectMiddle => "Perfect Middle",
            PrincipalPart::AoristPassive => "Aorist Passive",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_deserialize_unit() -> Fallible<()> {
        let yaml = r#"
- name: "Unit 10"
  unit: 10
  pp:
    - pr: "λύω"
      fu: "λύσω"
      ao: "ἔλυσα"
      pf: "λέλυκα"
      pm: "λέλυμαι"
      ap: "ἐλύθην"
    - pr: "εἰμί"
      fu: "ἔσομαι"
"#;
        let units: Vec<UnitPP> = serde_yaml::from_str(yaml)?;
        assert_eq!(units[0].pp.len(), 2);
        assert_eq!(units[0].pp[0].get(PrincipalPart::PerfectMiddle), "λέλυμαι");
        assert_eq!(units[0].pp[1].ap, "");
        Ok(())
    }

    #[test]
    fn test_null_and_negative_unit() -> Fallible<()> {
        let yaml = "- name: Unit 10\n  unit:\n  pp:\n    - pr: λύω\n- name: Unit ?\n  unit: -1\n";
        let units: Vec<UnitPP> = serde_yaml::from_str(yaml)?;
        assert_eq!(units[0].unit, 0);
        assert_eq!(units[1].unit, -1);
        assert!(units[1].pp.is_empty());
        Ok(())
    }

    #[test]
    fn test_present_parts() {
        let parts = Parts {
            pr: "εἰμί".to_string(),
            fu: "ἔσομαι".to_string(),
            ..Parts::default()
        };
        let present: Vec<PrincipalPart> = parts.present_parts().map(|(p, _)| p).collect();
        assert_eq!(present, vec![PrincipalPart::Present, PrincipalPart::Future]);
    }

    #[test]
    fn test_from_number() {
        assert_eq!(PrincipalPart::from_number(5), Some(PrincipalPart::PerfectMiddle));
        assert_eq!(PrincipalPart::from_number(7), None);
    }
}
