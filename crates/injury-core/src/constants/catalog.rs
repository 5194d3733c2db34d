// ABOUTME: Catalog tables the population generator draws names, places, and injuries from
// ABOUTME: Fixed ordering matters: equal seeds must index the same entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Injury Insight Contributors

/// First names for male athletes
pub const MALE_FIRST_NAMES: [&str; 50] = [
    "James",
    "John",
    "Michael",
    "David",
    "Chris",
    "Daniel",
    "Matthew",
    "Andrew",
    "Joshua",
    "Ryan",
    "Brandon",
    "Justin",
    "Kevin",
    "Brian",
    "Eric",
    "Jason",
    "Jeffrey",
    "Tyler",
    "Jacob",
    "Nicholas",
    "Marcus",
    "Antonio",
    "Carlos",
    "Luis",
    "Diego",
    "Rafael",
    "Bruno",
    "Lucas",
    "Mateo",
    "Sebastian",
    "Yuki",
    "Hiroshi",
    "Kenji",
    "Takeshi",
    "Ryo",
    "Wei",
    "Chen",
    "Li",
    "Zhang",
    "Wang",
    "Mohammed",
    "Ahmed",
    "Omar",
    "Hassan",
    "Youssef",
    "Pierre",
    "Jean",
    "Paul",
    "Hans",
    "Klaus",
];

/// First names for female athletes
pub const FEMALE_FIRST_NAMES: [&str; 40] = [
    "Sarah",
    "Jessica",
    "Emily",
    "Ashley",
    "Samantha",
    "Amanda",
    "Brittany",
    "Elizabeth",
    "Taylor",
    "Lauren",
    "Megan",
    "Rachel",
    "Nicole",
    "Michelle",
    "Jennifer",
    "Stephanie",
    "Christina",
    "Heather",
    "Amber",
    "Melissa",
    "Maria",
    "Sofia",
    "Isabella",
    "Valentina",
    "Camila",
    "Ana",
    "Lucia",
    "Elena",
    "Carmen",
    "Rosa",
    "Yuki",
    "Sakura",
    "Hana",
    "Mei",
    "Lin",
    "Fatima",
    "Aisha",
    "Layla",
    "Noor",
    "Zara",
];

/// Last names shared by every athlete
pub const LAST_NAMES: [&str; 70] = [
    "Smith",
    "Johnson",
    "Williams",
    "Brown",
    "Jones",
    "Garcia",
    "Miller",
    "Davis",
    "Rodriguez",
    "Martinez",
    "Hernandez",
    "Lopez",
    "Gonzalez",
    "Wilson",
    "Anderson",
    "Thomas",
    "Taylor",
    "Moore",
    "Jackson",
    "Martin",
    "Lee",
    "Perez",
    "Thompson",
    "White",
    "Harris",
    "Sanchez",
    "Clark",
    "Ramirez",
    "Lewis",
    "Robinson",
    "Walker",
    "Young",
    "Allen",
    "King",
    "Wright",
    "Scott",
    "Torres",
    "Nguyen",
    "Hill",
    "Flores",
    "Green",
    "Adams",
    "Nelson",
    "Baker",
    "Hall",
    "Rivera",
    "Campbell",
    "Mitchell",
    "Carter",
    "Roberts",
    "Müller",
    "Schmidt",
    "Schneider",
    "Fischer",
    "Weber",
    "Rossi",
    "Ferrari",
    "Esposito",
    "Colombo",
    "Romano",
    "Tanaka",
    "Yamamoto",
    "Watanabe",
    "Takahashi",
    "Kobayashi",
    "Kimura",
    "Hayashi",
    "Saito",
    "Sasaki",
    "Yamaguchi",
];

/// Countries of origin
pub const COUNTRIES: [&str; 30] = [
    "USA",
    "UK",
    "Canada",
    "Australia",
    "Germany",
    "France",
    "Spain",
    "Brazil",
    "Japan",
    "China",
    "Italy",
    "Netherlands",
    "Argentina",
    "Mexico",
    "South Korea",
    "India",
    "Russia",
    "Sweden",
    "Norway",
    "Belgium",
    "Portugal",
    "Switzerland",
    "Austria",
    "Poland",
    "Czech Republic",
    "Denmark",
    "Finland",
    "Ireland",
    "New Zealand",
    "South Africa",
];

/// Injury types for career history and current injuries
pub const INJURY_TYPES: [&str; 37] = [
    "ACL Tear",
    "MCL Sprain",
    "PCL Injury",
    "Hamstring Strain",
    "Quadriceps Strain",
    "Ankle Sprain",
    "High Ankle Sprain",
    "Concussion",
    "Post-Concussion Syndrome",
    "Rotator Cuff Tear",
    "Rotator Cuff Tendinitis",
    "Tennis Elbow",
    "Golfer's Elbow",
    "Achilles Tendinitis",
    "Achilles Rupture",
    "Shin Splints",
    "Stress Fracture",
    "Groin Pull",
    "Hip Flexor Strain",
    "Hip Labral Tear",
    "Dislocated Shoulder",
    "Separated Shoulder",
    "Meniscus Tear",
    "Plantar Fasciitis",
    "Turf Toe",
    "Lower Back Strain",
    "Herniated Disc",
    "Calf Strain",
    "Wrist Sprain",
    "Finger Fracture",
    "Thumb Sprain",
    "Patellar Tendinitis",
    "IT Band Syndrome",
    "Bursitis",
    "Muscle Contusion",
    "Rib Fracture",
    "Collarbone Fracture",
];

/// Chronic condition draw table; `None` entries mean no condition and appear
/// three times to weight the draw
pub const CHRONIC_CONDITION_DRAWS: [Option<&str>; 8] = [
    None,
    None,
    None,
    Some("Arthritis"),
    Some("Tendinitis"),
    Some("Back Issues"),
    Some("Knee Issues"),
    Some("Shoulder Instability"),
];
