//! Builtin IO property definitions for Codec 8 Extended devices

/// One row of the builtin property table
pub(super) struct PropertyEntry {
    pub id: u16,
    pub label: &'static str,
    pub dimension: Option<&'static str>,
    pub values: &'static [(i64, &'static str)],
}

const fn labelled(id: u16, label: &'static str) -> PropertyEntry {
    PropertyEntry {
        id,
        label,
        dimension: None,
        values: &[],
    }
}

const fn measured(id: u16, label: &'static str, dimension: &'static str) -> PropertyEntry {
    PropertyEntry {
        id,
        label,
        dimension: Some(dimension),
        values: &[],
    }
}

const fn enumerated(
    id: u16,
    label: &'static str,
    values: &'static [(i64, &'static str)],
) -> PropertyEntry {
    PropertyEntry {
        id,
        label,
        dimension: None,
        values,
    }
}

const NO_YES: &[(i64, &str)] = &[(0, "No"), (1, "Yes")];

const GEOFENCE_ZONE: &[(i64, &str)] = &[
    (0, "target left zone"),
    (1, "target entered zone"),
    (2, "over speeding end"),
    (3, "over speeding start"),
];

pub(super) static PROPERTIES: &[PropertyEntry] = &[
    enumerated(1, "Din 1", &[(0, "0"), (1, "1")]),
    labelled(2, "Digital Input 2"),
    labelled(3, "Digital Input 3"),
    labelled(4, "Pulse Counter Din1"),
    labelled(5, "Pulse Counter Din2"),
    labelled(6, "Analog Input 2"),
    labelled(8, "Authorized iButton"),
    labelled(9, "Analog Input 1"),
    enumerated(10, "SD Status", &[(0, "Not present"), (1, "Present")]),
    labelled(11, "SIM ICCID1 number"),
    labelled(12, "Fuel Used GPS"),
    measured(13, "Average Fuel Use", "L / 100 km"),
    labelled(14, "SIM ICCID2 number"),
    labelled(15, "Eco Score"),
    labelled(16, "Total Odometer"),
    labelled(17, "Accelerometer X axis"),
    labelled(18, "Accelerometer Y axis"),
    labelled(19, "Accelerometer Z axis"),
    measured(20, "BLE 2 Battery Voltage", "%"),
    enumerated(21, "GSM Signal Strength", &[(1, "1"), (2, "2"), (3, "3"), (4, "4"), (5, "5")]),
    measured(22, "BLE 3 Battery Voltage", "%"),
    measured(23, "BLE 4 Battery Voltage", "%"),
    measured(24, "Speed", "km/h"),
    measured(25, "BLE 1 Temperature", "C"),
    measured(26, "BLE 2 Temperature", "C"),
    measured(27, "BLE 3 Temperature", "C"),
    measured(28, "BLE 4 Temperature", "C"),
    measured(29, "BLE 1 Battery Voltage", "%"),
    labelled(30, "Number of DTC"),
    measured(31, "Calculated engine load value", "%"),
    measured(32, "Engine coolant temperature", "C"),
    measured(33, "Short term fuel trim 1", "%"),
    measured(34, "Fuel pressure", "kPa"),
    measured(35, "Intake manifold absolute pressure", "kPa"),
    measured(36, "Engine RPM", "rpm"),
    measured(37, "Vehicle speed", "km/h"),
    measured(38, "Timing advance", "O"),
    measured(39, "Intake air temperature", "C"),
    measured(40, "MAF air flow rate", "g/sec, *0.01"),
    measured(41, "Throttle position", "%"),
    measured(42, "Run time since engine start", "s"),
    measured(43, "Distance traveled MIL on", "Km"),
    measured(44, "Relative fuel rail pressure", "kPa*0.1"),
    measured(45, "Direct fuel rail pressure", "kPa*0.1"),
    measured(46, "Commanded EGR", "%"),
    measured(47, "EGR error", "%"),
    measured(48, "Fuel level", "%"),
    measured(49, "Distance traveled since codes cleared", "Km"),
    measured(50, "Barometric pressure", "kPa"),
    measured(51, "Control module voltage", "mV"),
    measured(52, "Absolute load value", "%"),
    measured(53, "Ambient air temperature", "C"),
    measured(54, "Time run with MIL on", "min"),
    measured(55, "Time since trouble codes cleared", "min"),
    measured(56, "Absolute fuel rail pressure", "kPa*10"),
    measured(57, "Hybrid battery pack remaining life", "%"),
    measured(58, "Engine oil temperature", "C"),
    measured(59, "Fuel injection timing", "O, *0.01"),
    measured(60, "Engine fuel rate", "L/h, *100"),
    enumerated(61, "Geofence zone 06", GEOFENCE_ZONE),
    enumerated(62, "Geofence zone 07", GEOFENCE_ZONE),
    enumerated(63, "Geofence zone 08", GEOFENCE_ZONE),
    enumerated(64, "Geofence zone 09", GEOFENCE_ZONE),
    enumerated(65, "Geofence zone 10", GEOFENCE_ZONE),
    measured(66, "Ext Voltage", "mV"),
    measured(67, "Battery Voltage", "mV"),
    measured(68, "Battery Current", "mA"),
    enumerated(
        69,
        "GNSS Status",
        &[
            (0, "OFF"),
            (1, "ON with fix"),
            (2, "ON without fix"),
            (3, "In sleep state"),
        ],
    ),
    enumerated(70, "Geofence zone 11", GEOFENCE_ZONE),
    labelled(71, "Dallas Temperature ID 4"),
    labelled(72, "Dallas Temperature 1"),
    labelled(73, "Dallas Temperature 2"),
    labelled(74, "Dallas Temperature 3"),
    labelled(75, "Dallas Temperature 4"),
    labelled(76, "Dallas Temperature ID 1"),
    labelled(77, "Dallas Temperature ID 2"),
    labelled(78, "iButton"),
    labelled(79, "Dallas Temperature ID 3"),
    enumerated(
        80,
        "Data Mode",
        &[
            (0, "Home On Stop"),
            (1, "Home On Moving"),
            (2, "Roaming On Stop"),
            (3, "Roaming On Moving"),
            (4, "Unknown On Stop"),
            (5, "Unknown On Moving"),
        ],
    ),
    labelled(81, "Vehicle Speed"),
    labelled(82, "Accelerator Pedal Position"),
    labelled(83, "Fuel Consumed"),
    labelled(84, "Fuel level"),
    labelled(85, "Engine RPM"),
    measured(86, "BLE 1 Humidity", "%RH"),
    labelled(87, "Total Mileage"),
    enumerated(88, "Geofence zone 12", GEOFENCE_ZONE),
    labelled(89, "Fuel level"),
    labelled(90, "Door Status"),
    enumerated(91, "Geofence zone 13", GEOFENCE_ZONE),
    enumerated(92, "Geofence zone 14", GEOFENCE_ZONE),
    enumerated(93, "Geofence zone 15", GEOFENCE_ZONE),
    enumerated(94, "Geofence zone 16", GEOFENCE_ZONE),
    enumerated(95, "Geofence zone 17", GEOFENCE_ZONE),
    enumerated(96, "Geofence zone 18", GEOFENCE_ZONE),
    enumerated(97, "Geofence zone 19", GEOFENCE_ZONE),
    enumerated(98, "Geofence zone 20", GEOFENCE_ZONE),
    enumerated(99, "Geofence zone 21", GEOFENCE_ZONE),
    labelled(100, "Program Number"),
    labelled(101, "Module ID 8B"),
    labelled(102, "Engine Worktime"),
    labelled(103, "Engine Worktime (counted)"),
    measured(104, "BLE 2 Humidity", "%RH"),
    labelled(105, "Total Mileage (counted)"),
    measured(106, "BLE 3 Humidity", "%RH"),
    labelled(107, "Fuel Consumed (counted)"),
    measured(108, "BLE 4 Humidity", "%RH"),
    labelled(110, "Fuel Rate"),
    labelled(111, "AdBlue Level"),
    labelled(112, "AdBlue Level"),
    measured(113, "FM battery level", "%"),
    labelled(114, "Engine Load"),
    labelled(115, "Engine Temperature"),
    labelled(118, "Axle 1 Load"),
    labelled(119, "Axle 2 Load"),
    labelled(120, "Axle 3 Load"),
    labelled(121, "Axle 4 Load"),
    labelled(122, "Axle 5 Load"),
    labelled(123, "Control State Flags"),
    labelled(124, "Agricultural Machinery Flags"),
    labelled(125, "Harvesting Time"),
    labelled(126, "Area of Harvest"),
    labelled(127, "Mowing Efficiency"),
    labelled(128, "Grain Mown Volume"),
    labelled(129, "Grain Moisture"),
    labelled(130, "Harvesting Drum RPM"),
    labelled(131, "Gap Under Harvesting Drum"),
    labelled(132, "Security State Flags"),
    labelled(133, "Tachograph Total Vehicle Distance"),
    labelled(134, "Trip Distance"),
    labelled(135, "Tachograph Vehicle Speed"),
    labelled(136, "Tacho Driver Card Presence"),
    labelled(137, "Driver 1 States"),
    labelled(138, "Driver 2 States"),
    labelled(139, "Driver 1 Continuous Driving Time"),
    labelled(140, "Driver 2 Continuous Driving Time"),
    labelled(141, "Driver 1 Cumulative Break Time"),
    labelled(142, "Driver 2 Cumulative Break Time"),
    labelled(143, "Driver 1 Selected Activity Duration"),
    labelled(144, "Driver 2 Selected Activity Duration"),
    labelled(145, "Driver 1 Cumulative Driving Time"),
    labelled(146, "Driver 2 Cumulative Driving Time"),
    labelled(147, "Driver 1 ID High"),
    labelled(148, "Driver 1 ID Low"),
    labelled(149, "Driver 2 ID High"),
    labelled(150, "Driver 2 ID Low"),
    labelled(151, "Battery Temperature"),
    labelled(152, "Battery Level"),
    enumerated(153, "Geofence zone 22", GEOFENCE_ZONE),
    enumerated(154, "Geofence zone 23", GEOFENCE_ZONE),
    enumerated(155, "Geofence zone 01", GEOFENCE_ZONE),
    enumerated(156, "Geofence zone 02", GEOFENCE_ZONE),
    enumerated(157, "Geofence zone 03", GEOFENCE_ZONE),
    enumerated(158, "Geofence zone 04", GEOFENCE_ZONE),
    enumerated(159, "Geofence zone 05", GEOFENCE_ZONE),
    labelled(160, "DTC Faults"),
    labelled(161, "Slope of Arm"),
    labelled(162, "Rotation of Arm"),
    labelled(163, "Eject of Arm"),
    labelled(164, "Horizontal Distance Arm Vehicle"),
    labelled(165, "Height Arm Above Ground"),
    labelled(166, "Drill RPM"),
    labelled(167, "Amount Of Spread Salt Square Meter"),
    labelled(168, "Battery Voltage"),
    labelled(169, "Amount Of Spread Fine Grained Salt"),
    labelled(170, "Amount Of Coarse Grained Salt"),
    labelled(171, "Amount Of Spread DiMix"),
    labelled(172, "Amount Of Spread Coarse Grained Calcium"),
    labelled(173, "Amount Of Spread Calcium Chloride"),
    labelled(174, "Amount Of Spread Sodium Chloride"),
    enumerated(175, "Auto Geofence", &[(0, "target left zone"), (1, "target entered zone ")]),
    labelled(176, "Amount Of Spread Magnesium Chloride"),
    labelled(177, "Amount Of Spread Gravel"),
    labelled(178, "Amount Of Spread Sand"),
    labelled(179, "Digital Output 1"),
    labelled(180, "Digital Output 2"),
    labelled(181, "PDOP"),
    labelled(182, "HDOP"),
    labelled(183, "Width Pouring Left"),
    labelled(184, "Width Pouring Right"),
    labelled(185, "Salt Spreader Working Hours"),
    labelled(186, "Distance During Salting"),
    labelled(187, "Load Weight"),
    labelled(188, "Retarder Load"),
    labelled(189, "Cruise Time"),
    enumerated(190, "Geofence zone 24", GEOFENCE_ZONE),
    enumerated(191, "Geofence zone 25", GEOFENCE_ZONE),
    enumerated(192, "Geofence zone 26", GEOFENCE_ZONE),
    enumerated(193, "Geofence zone 27", GEOFENCE_ZONE),
    enumerated(194, "Geofence zone 28", GEOFENCE_ZONE),
    enumerated(195, "Geofence zone 29", GEOFENCE_ZONE),
    enumerated(196, "Geofence zone 30", GEOFENCE_ZONE),
    enumerated(197, "Geofence zone 31", GEOFENCE_ZONE),
    enumerated(198, "Geofence zone 32", GEOFENCE_ZONE),
    labelled(199, "Trip Odometer"),
    enumerated(200, "Sleep Mode", &[(0, "No Sleep"), (1, "GPS Sleep"), (2, "Deep Sleep")]),
    labelled(201, "LLS 1 Fuel Level"),
    labelled(202, "LLS 1 Temperature"),
    labelled(203, "LLS 2 Fuel Level"),
    labelled(204, "LLS 2 Temperature"),
    labelled(205, "GSM Cell ID"),
    labelled(206, "GSM Area Code"),
    labelled(207, "RFID"),
    enumerated(208, "Geofence zone 33", GEOFENCE_ZONE),
    enumerated(209, "Geofence zone 34", GEOFENCE_ZONE),
    labelled(210, "LLS 3 Fuel Level"),
    labelled(211, "LLS 3 Temperature"),
    labelled(212, "LLS 4 Fuel Level"),
    labelled(213, "LLS 4 Temperature"),
    labelled(214, "LLS 5 Fuel Level"),
    labelled(215, "LLS 5 Temperature"),
    enumerated(216, "Geofence zone 35", GEOFENCE_ZONE),
    enumerated(217, "Geofence zone 36", GEOFENCE_ZONE),
    enumerated(218, "Geofence zone 37", GEOFENCE_ZONE),
    enumerated(219, "Geofence zone 38", GEOFENCE_ZONE),
    enumerated(220, "Geofence zone 39", GEOFENCE_ZONE),
    enumerated(221, "Geofence zone 40", GEOFENCE_ZONE),
    enumerated(222, "Geofence zone 41", GEOFENCE_ZONE),
    enumerated(223, "Geofence zone 42", GEOFENCE_ZONE),
    enumerated(224, "Geofence zone 43", GEOFENCE_ZONE),
    enumerated(225, "Geofence zone 44", GEOFENCE_ZONE),
    enumerated(226, "Geofence zone 45", GEOFENCE_ZONE),
    enumerated(227, "Geofence zone 46", GEOFENCE_ZONE),
    enumerated(228, "Geofence zone 47", GEOFENCE_ZONE),
    enumerated(229, "Geofence zone 48", GEOFENCE_ZONE),
    enumerated(230, "Geofence zone 49", GEOFENCE_ZONE),
    enumerated(231, "Geofence zone 50", GEOFENCE_ZONE),
    labelled(232, "CNG Status"),
    labelled(233, "CNG Used"),
    labelled(234, "CNG Level"),
    labelled(235, "Oil Level"),
    enumerated(236, "Alarm", &[(0, "Reserved"), (1, "Alarm event occured")]),
    enumerated(
        237,
        "Network Type",
        &[
            (0, "3G"),
            (1, "GSM"),
            (2, "4G"),
            (3, "LTE CAT M1"),
            (4, "LTE CAT NB1"),
            (99, "Unknown"),
        ],
    ),
    labelled(238, "User ID"),
    enumerated(239, "Ignition", NO_YES),
    enumerated(240, "Movement", NO_YES),
    labelled(241, "GSM Operator"),
    measured(243, "Green Driving Event Duration", "ms"),
    enumerated(246, "Towing Detection Event", &[(1, "Send Towing detected")]),
    enumerated(
        247,
        "Crash Detection",
        &[
            (1, "Crash Detected"),
            (2, "Crash Trace Record"),
            (3, "Crash trace record(calibrated)"),
        ],
    ),
    enumerated(
        248,
        "Immobilizer",
        &[
            (0, "iButton not connected"),
            (1, "iButton connected (Immobilizer)"),
            (2, "iButton connected (Authorized Driving)"),
        ],
    ),
    enumerated(249, "Jamming Detection", &[(0, "Jamming Ended"), (1, "Jamming Detected")]),
    enumerated(
        250,
        "Trip Event",
        &[
            (0, "Trip Ended"),
            (1, "Trip Started"),
            (2, "Business Status"),
            (3, "Private Status"),
            (4, "Custom Statuses"),
            (5, "Custom Statuses"),
            (6, "Custom Statuses"),
            (7, "Custom Statuses"),
            (8, "Custom Statuses"),
            (9, "Custom Statuses"),
        ],
    ),
    enumerated(251, "Idling Event", &[(0, "Idling ended event"), (1, "Idling started event")]),
    enumerated(252, "Unplug Event", &[(1, "Send when unplug event happens")]),
    enumerated(253, "Green Driving Type", &[(1, "Acceleration"), (2, "Braking"), (3, "Cornering")]),
    measured(254, "Green Driving Value", "g*10"),
    measured(255, "Overspeeding Event", "km/h"),
    labelled(256, "VIN"),
    labelled(257, "Crash trace data"),
    labelled(258, "EcoMaximum"),
    labelled(259, "EcoAverage"),
    labelled(260, "EcoDuration"),
    enumerated(
        263,
        "BT Status",
        &[
            (0, "BT is disabled"),
            (1, "BT Enabled, not device connected"),
            (2, "Device connected, BTv3 Only"),
            (3, "Device connected, BLE only"),
            (4, "Device connected, BLE + BT"),
        ],
    ),
    labelled(264, "Barcode ID"),
    labelled(269, "Escort LLS Temperature #1"),
    labelled(270, "BLE Fuel Level #1"),
    labelled(271, "Escort LLS Battery Voltage #1"),
    labelled(272, "Escort LLS Temperature #2"),
    labelled(273, "BLE Fuel Level #2"),
    labelled(274, "Escort LLS Battery Voltage #2"),
    labelled(275, "Escort LLS Temperature #3"),
    labelled(276, "BLE Fuel Level #3"),
    labelled(277, "Escort LLS Battery Voltage #3"),
    labelled(278, "Escort LLS Temperature #4"),
    labelled(279, "BLE Fuel Level #4"),
    labelled(280, "Escort LLS Battery Voltage #4"),
    labelled(281, "fault codes"),
    labelled(282, "Fault Codes"),
    enumerated(283, "Driving State", &[(1, "Ignition ON"), (2, "Driving"), (3, "Ignition OFF")]),
    labelled(284, "Driving Records"),
    labelled(285, "Blood alcohol content"),
    labelled(303, "Instant Movement"),
    labelled(304, "Vehicles Range On Battery"),
    labelled(305, "Vehicles Range On Additional Fuel"),
    labelled(306, "BLE Fuel Frequency #1"),
    labelled(307, "BLE Fuel Frequency #2"),
    labelled(308, "BLE Fuel Frequency #3"),
    labelled(309, "BLE Fuel Frequency #4"),
    labelled(317, "Crash event counter"),
    labelled(325, "VIN"),
    labelled(327, "UL202-02 Sensor Fuel level"),
    labelled(329, "AIN Speed"),
    labelled(331, "BLE 1 Custom #1"),
    labelled(332, "BLE 2 Custom #1"),
    labelled(333, "BLE 3 Custom #1"),
    labelled(334, "BLE 4 Custom #1"),
    labelled(335, "BLE Luminosity #1"),
    labelled(336, "BLE Luminosity #2"),
    labelled(337, "BLE Luminosity #3"),
    labelled(338, "BLE Luminosity #4"),
    labelled(380, "Digital output 3"),
    labelled(381, "Ground Sense"),
    labelled(385, "Beacon"),
    labelled(387, "ISO6709  Coordinates"),
    labelled(388, "Module ID 17B"),
    labelled(389, "OBD OEM Total Mileage"),
    labelled(390, "OBD OEM Fuel Level"),
    labelled(391, "Private mode"),
    labelled(403, "Driver Name"),
    labelled(404, "Driver card license type"),
    labelled(405, "Driver Gender"),
    labelled(406, "Driver Card ID"),
    labelled(407, "Driver card expiration date"),
    labelled(408, "Driver Card place of issue"),
    labelled(409, "Driver Status Event"),
    labelled(411, "OEM Battery charge level"),
    labelled(412, "OEM Battery power consumption"),
    enumerated(449, "Ignition On Counter", &[(0, "Disable"), (1, "Enable")]),
    labelled(463, "BLE 1 Custom #2"),
    labelled(464, "BLE 1 Custom #3"),
    labelled(465, "BLE 1 Custom #4"),
    labelled(466, "BLE 1 Custom #5"),
    labelled(467, "BLE 2 Custom #2"),
    labelled(468, "BLE 2 Custom #3"),
    labelled(469, "BLE 2 Custom #4"),
    labelled(470, "BLE 2 Custom #5"),
    labelled(471, "BLE 3 Custom #2"),
    labelled(472, "BLE 3 Custom #3"),
    labelled(473, "BLE 3 Custom #4"),
    labelled(474, "BLE 3 Custom #5"),
    labelled(475, "BLE 4 Custom #2"),
    labelled(476, "BLE 4 Custom #3"),
    labelled(477, "BLE 4 Custom #4"),
    labelled(478, "BLE 4 Custom #5"),
    labelled(483, "UL202-02 Sensor Status"),
    labelled(500, "MSP500 vendor name"),
    labelled(501, "MSP500 vehicle number"),
    labelled(502, "MSP500 speed sensor"),
    labelled(517, "Security State Flags P4"),
    labelled(518, "Control State Flags P4"),
    labelled(519, "Indicator State Flags P4"),
    labelled(520, "Agricultural State Flags P4"),
    labelled(521, "Utility State Flags P4"),
    labelled(522, "Cistern State Flags P4"),
    labelled(543, "Hybrid System Voltage"),
    labelled(544, "Hybrid System Current"),
    labelled(636, "UMTS/LTE Cell ID"),
    labelled(755, "OEM Remaining distance"),
    enumerated(
        759,
        "Fuel Type",
        &[
            (0, "Not available"),
            (1, "Gasoline"),
            (2, "Methanol"),
            (3, "Ethanol"),
            (4, "Diesel"),
            (5, "LPG"),
            (6, "CNG"),
            (7, "Propane"),
            (8, "Electric"),
            (9, "Bifuel running Gasoline"),
            (10, "Bifuel running Methanol"),
            (11, "Bifuel running Ethanol"),
            (12, "Bifuel running LPG"),
            (13, "Bifuel running CNG"),
            (14, "Bifuel running Propane"),
            (15, "Bifuel running Electricity"),
            (16, "Bifuel running electric and combustion engine"),
            (17, "Hybrid gasoline"),
            (18, "Hybrid Ethanol"),
            (19, "Hybrid Diesel"),
            (20, "Hybrid Electric"),
            (21, "Hybrid running electric and combustion engine"),
            (22, "Hybrid Regenerative"),
            (23, "Bifuel running diesel"),
        ],
    ),
    labelled(855, "LNG Used"),
    labelled(856, "LNG Used (counted)"),
    labelled(857, "LNG Level"),
    labelled(858, "LNG Level"),
];
