//! Static wound-care reference material.
//!
//! Embedded verbatim into every analysis prompt so that candidate models
//! ground their answers in the same home-care protocols regardless of which
//! backend serves the request.

/// Reference table of home-care protocols for common minor wounds.
pub const WOUND_CARE_GUIDE: &str = r#"WOUND CARE REFERENCE

Cut (Laceration)
- Typical severity: Low when shallow and bleeding stops within 10 minutes
- Care: wash hands, rinse the cut with clean water, apply gentle pressure
  with a clean cloth, cover with an adhesive bandage once bleeding stops
- Seek care: edges gape open, bleeding soaks through after 10 minutes of
  pressure, caused by a dirty or rusty object

Scrape (Abrasion)
- Typical severity: Low
- Care: rinse with clean water to remove dirt, wash gently with mild soap,
  apply a thin layer of antibiotic ointment, cover with a non-stick dressing
- Seek care: embedded debris that will not rinse out, spreading redness

Burn (First-degree / small second-degree)
- Typical severity: Low for reddened skin, Medium when small blisters form
- Care: cool under running water for 10-20 minutes, do not apply ice or
  butter, cover loosely with sterile gauze, leave blisters intact
- Seek care: blisters larger than a coin, burns on face/hands/joints,
  any third-degree appearance (white, leathery, painless)

Bruise (Contusion)
- Typical severity: Low
- Care: rest the area, apply a cold pack wrapped in cloth for 15 minutes at
  a time during the first day, elevate if possible
- Seek care: swelling that worsens rapidly, inability to move a nearby joint

Puncture
- Typical severity: Medium, infection risk is higher than it looks
- Care: let it bleed briefly to flush, rinse with clean water, wash with
  soap, cover with a bandage, do not probe the hole
- Seek care: object is still embedded (do not remove large objects), deep
  puncture from a nail or bite, tetanus booster older than 5 years

Blister
- Typical severity: Low
- Care: leave intact when possible, pad with a donut-shaped moleskin,
  if drained keep the roof of skin in place and cover
- Seek care: cloudy fluid, warmth, or red streaks

Insect sting / bite
- Typical severity: Low, Medium with strong local swelling
- Care: remove a visible stinger by scraping sideways, wash with soap and
  water, apply a cold pack, consider an oral antihistamine for itching
- Seek care: any face/mouth swelling, hives away from the sting site,
  trouble breathing (call emergency services immediately)

Splinter
- Typical severity: Low
- Care: wash the area, remove a protruding splinter with clean tweezers
  pulling along the entry angle, wash again and cover
- Seek care: deep splinter, glass or metal fragments, the area is numb

General red flags (always High severity)
- Bleeding that does not slow with direct pressure
- Numbness, loss of movement, or bone/tendon visible
- Signs of infection: spreading redness, warmth, pus, fever"#;

/// Closing phrase every recommendation must carry.
pub const DISCLAIMER: &str = "AidPal is not a doctor. If you are ever unsure, or symptoms get worse, please see a healthcare professional.";
