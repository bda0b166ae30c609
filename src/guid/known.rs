// Mon Feb 02 2026 - Alex

use crate::guid::Guid;
use once_cell::sync::Lazy;

#[derive(Debug, Clone)]
pub struct KnownGuid {
    pub guid: Guid,
    pub name: &'static str,
}

const KNOWN_GUID_TEXT: &[(&str, &str)] = &[
    // UEFI core protocols
    ("5B1B31A1-9562-11D2-8E3F-00A0C969723B", "EFI_LOADED_IMAGE_PROTOCOL_GUID"),
    ("BC62157E-3E33-4FEC-9920-2D3B36D750DF", "EFI_LOADED_IMAGE_DEVICE_PATH_PROTOCOL_GUID"),
    ("09576E91-6D3F-11D2-8E39-00A0C969723B", "EFI_DEVICE_PATH_PROTOCOL_GUID"),
    ("8B843E20-8132-4852-90CC-551A4E4A7F1C", "EFI_DEVICE_PATH_TO_TEXT_PROTOCOL_GUID"),
    ("05C99A21-C70F-4AD2-8A5F-35DF3343F51E", "EFI_DEVICE_PATH_FROM_TEXT_PROTOCOL_GUID"),
    ("0379BE4E-D706-437D-B037-EDB82FB772A4", "EFI_DEVICE_PATH_UTILITIES_PROTOCOL_GUID"),
    ("18A031AB-B443-4D1A-A5C0-0C09261E9F71", "EFI_DRIVER_BINDING_PROTOCOL_GUID"),
    ("107A772C-D5E1-11D4-9A46-0090273FC14D", "EFI_COMPONENT_NAME_PROTOCOL_GUID"),
    ("6A7A5CFF-E8D9-4F70-BADA-75AB3025CE14", "EFI_COMPONENT_NAME2_PROTOCOL_GUID"),
    ("4D330321-025F-4AAC-90D8-5ED900173B63", "EFI_DRIVER_DIAGNOSTICS2_PROTOCOL_GUID"),
    ("6B30C738-A391-11D4-9A3B-0090273FC14D", "EFI_PLATFORM_DRIVER_OVERRIDE_PROTOCOL_GUID"),
    ("3BC1B285-8A15-4A82-AABF-4D7D13FB3265", "EFI_BUS_SPECIFIC_DRIVER_OVERRIDE_PROTOCOL_GUID"),
    ("A4C751FC-23AE-4C3E-92E9-4964CF63F349", "EFI_UNICODE_COLLATION_PROTOCOL2_GUID"),
    ("D8117CFE-94A6-11D4-9A3A-0090273FC14D", "EFI_DECOMPRESS_PROTOCOL_GUID"),
    ("2755590C-6F3C-42FA-9EA4-A3BA543CDA25", "EFI_DEBUG_SUPPORT_PROTOCOL_GUID"),
    ("AFBFDE41-2E6E-4262-BA65-62B9236E5495", "EFI_TIMESTAMP_PROTOCOL_GUID"),
    ("3152BCA5-EADE-433D-862E-C01CDC291F44", "EFI_RNG_PROTOCOL_GUID"),
    ("3FDDA605-A76E-4F46-AD29-12F4531B3D08", "EFI_MP_SERVICES_PROTOCOL_GUID"),
    // Console
    ("387477C1-69C7-11D2-8E39-00A0C969723B", "EFI_SIMPLE_TEXT_INPUT_PROTOCOL_GUID"),
    ("DD9E7534-7762-4698-8C14-F58517A625AA", "EFI_SIMPLE_TEXT_INPUT_EX_PROTOCOL_GUID"),
    ("387477C2-69C7-11D2-8E39-00A0C969723B", "EFI_SIMPLE_TEXT_OUTPUT_PROTOCOL_GUID"),
    ("31878C87-0B75-11D5-9A4F-0090273FC14D", "EFI_SIMPLE_POINTER_PROTOCOL_GUID"),
    ("9042A9DE-23DC-4A38-96FB-7ADED080516A", "EFI_GRAPHICS_OUTPUT_PROTOCOL_GUID"),
    ("1C0C34F6-D380-41FA-A049-8AD06C1A66AA", "EFI_EDID_DISCOVERED_PROTOCOL_GUID"),
    ("BD8C1056-9F36-44EC-92A8-A6337F817986", "EFI_EDID_ACTIVE_PROTOCOL_GUID"),
    // Storage and buses
    ("964E5B21-6459-11D2-8E39-00A0C969723B", "EFI_BLOCK_IO_PROTOCOL_GUID"),
    ("CE345171-BA0B-11D2-8E4F-00A0C969723B", "EFI_DISK_IO_PROTOCOL_GUID"),
    ("964E5B22-6459-11D2-8E39-00A0C969723B", "EFI_SIMPLE_FILE_SYSTEM_PROTOCOL_GUID"),
    ("09576E92-6D3F-11D2-8E39-00A0C969723B", "EFI_FILE_INFO_ID"),
    ("09576E93-6D3F-11D2-8E39-00A0C969723B", "EFI_FILE_SYSTEM_INFO_ID"),
    ("1D3DE7F0-0807-424F-AA69-11A54E19A46F", "EFI_ATA_PASS_THRU_PROTOCOL_GUID"),
    ("143B7632-B81B-4CB7-ABD3-B625A5B9BFFE", "EFI_EXT_SCSI_PASS_THRU_PROTOCOL_GUID"),
    ("52C78312-8EDC-4233-98F2-1A1AA5E388A5", "EFI_NVM_EXPRESS_PASS_THRU_PROTOCOL_GUID"),
    ("4CF5B200-68B8-4CA5-9EEC-B23E3F50029A", "EFI_PCI_IO_PROTOCOL_GUID"),
    ("2F707EBB-4A1A-11D4-9A38-0090273FC14D", "EFI_PCI_ROOT_BRIDGE_IO_PROTOCOL_GUID"),
    ("2B2F68D6-0CD2-44CF-8E8B-BBA20B1B5B75", "EFI_USB_IO_PROTOCOL_GUID"),
    ("3E745226-9818-45B6-A2AC-D7CD0E8BA2BC", "EFI_USB2_HC_PROTOCOL_GUID"),
    ("A19832B9-AC25-11D3-9A2D-0090273FC14D", "EFI_SIMPLE_NETWORK_PROTOCOL_GUID"),
    ("03C4E603-AC28-11D3-9A2D-0090273FC14D", "EFI_PXE_BASE_CODE_PROTOCOL_GUID"),
    // HII
    ("EF9FC172-A1B2-4693-B327-6D32FC416042", "EFI_HII_DATABASE_PROTOCOL_GUID"),
    ("0FD96974-23AA-4CDC-B9CB-98D17750322A", "EFI_HII_STRING_PROTOCOL_GUID"),
    ("E9CA4775-8657-47FC-97E7-7ED65A084324", "EFI_HII_FONT_PROTOCOL_GUID"),
    ("31A6406A-6BDF-4E46-B2A2-EBAA89C40920", "EFI_HII_IMAGE_PROTOCOL_GUID"),
    ("587E72D7-CC50-4F79-8209-CA291FC1A10F", "EFI_HII_CONFIG_ROUTING_PROTOCOL_GUID"),
    ("330D4706-F2A0-4E4F-A369-B66FA8D54385", "EFI_HII_CONFIG_ACCESS_PROTOCOL_GUID"),
    ("B9D4C360-BCFB-4F9B-9298-53C136982258", "EFI_FORM_BROWSER2_PROTOCOL_GUID"),
    // DXE architectural protocols
    ("26BACCB1-6F42-11D4-BCE7-0080C73C8881", "EFI_CPU_ARCH_PROTOCOL_GUID"),
    ("26BACCB2-6F42-11D4-BCE7-0080C73C8881", "EFI_METRONOME_ARCH_PROTOCOL_GUID"),
    ("26BACCB3-6F42-11D4-BCE7-0080C73C8881", "EFI_TIMER_ARCH_PROTOCOL_GUID"),
    ("665E3FF6-46CC-11D4-9A38-0090273FC14D", "EFI_BDS_ARCH_PROTOCOL_GUID"),
    ("665E3FF5-46CC-11D4-9A38-0090273FC14D", "EFI_WATCHDOG_TIMER_ARCH_PROTOCOL_GUID"),
    ("B7DFB4E1-052F-449F-87BE-9818FC91B733", "EFI_RUNTIME_ARCH_PROTOCOL_GUID"),
    ("1E5668E2-8481-11D4-BCF1-0080C73C8881", "EFI_VARIABLE_ARCH_PROTOCOL_GUID"),
    ("6441F818-6362-4E44-B570-7DBA31DD2453", "EFI_VARIABLE_WRITE_ARCH_PROTOCOL_GUID"),
    ("27CFAC88-46CC-11D4-9A38-0090273FC14D", "EFI_RESET_ARCH_PROTOCOL_GUID"),
    ("27CFAC87-46CC-11D4-9A38-0090273FC14D", "EFI_REAL_TIME_CLOCK_ARCH_PROTOCOL_GUID"),
    ("1DA97072-BDDC-4B30-99F1-72A0B56FFF2A", "EFI_MONOTONIC_COUNTER_ARCH_PROTOCOL_GUID"),
    ("A46423E3-4617-49F1-B9FF-D1BFA9115839", "EFI_SECURITY_ARCH_PROTOCOL_GUID"),
    ("94AB2F58-1438-4EF1-9152-18941A3A0E68", "EFI_SECURITY2_ARCH_PROTOCOL_GUID"),
    ("D2B2B828-0826-48A7-B3DF-983C006024F0", "EFI_STATUS_CODE_RUNTIME_PROTOCOL_GUID"),
    ("220E73B6-6BDB-4413-8405-B974B108619A", "EFI_FIRMWARE_VOLUME2_PROTOCOL_GUID"),
    ("8F644FA9-E850-4DB1-9CE2-0B44698E8DA4", "EFI_FIRMWARE_VOLUME_BLOCK_PROTOCOL_GUID"),
    ("E857CAF6-C046-45DC-BE3F-EE0765FBA887", "EFI_S3_SAVE_STATE_PROTOCOL_GUID"),
    ("DB9A1E3D-45CB-4ABB-853B-E5387FDB2E2D", "EFI_LEGACY_BIOS_PROTOCOL_GUID"),
    ("CD3D0A05-9E24-437C-A891-1EE053DB7638", "EDKII_VARIABLE_LOCK_PROTOCOL_GUID"),
    ("11B34006-D85B-4D0A-A290-D5A571310EF7", "PCD_PROTOCOL_GUID"),
    ("13A3F0F6-264A-3EF0-F2E0-DEC512342F34", "EFI_PCD_PROTOCOL_GUID"),
    ("FFE06BDD-6107-46A6-7BB2-5A9C7EC5275C", "EFI_ACPI_TABLE_PROTOCOL_GUID"),
    ("EB97088E-CFDF-49C6-BE4B-D906A5B20E86", "EFI_ACPI_SDT_PROTOCOL_GUID"),
    ("DBFF9D55-89B7-46DA-BDDF-677D3DC0241D", "EFI_ACPI_SUPPORT_PROTOCOL_GUID"),
    ("03583FF6-CB36-4940-947E-B9B39F4AFAF7", "EFI_SMBIOS_PROTOCOL_GUID"),
    ("607F766C-7455-42BE-930B-E4D76DB2720F", "EFI_TCG2_PROTOCOL_GUID"),
    ("F541796D-A62E-4954-A775-9584F61B9CDD", "EFI_TCG_PROTOCOL_GUID"),
    // SMM
    ("1390954D-DA95-4227-9328-7282C217DAA8", "EFI_SMM_BASE_PROTOCOL_GUID"),
    ("F4CCBFB7-F6E0-47FD-9DD4-10A8F150C191", "EFI_SMM_BASE2_PROTOCOL_GUID"),
    ("C2702B74-800C-4131-8746-8FB5B89CE4AC", "EFI_SMM_ACCESS2_PROTOCOL_GUID"),
    ("843DC720-AB1E-42CB-9357-8A0078F3561B", "EFI_SMM_CONTROL2_PROTOCOL_GUID"),
    ("C68ED8E2-9DC6-4CBD-9D94-DB65ACC5C332", "EFI_SMM_COMMUNICATION_PROTOCOL_GUID"),
    ("E541B773-DD11-420C-B026-DF993653F8BF", "EFI_SMM_SW_DISPATCH_PROTOCOL_GUID"),
    ("18A3C6DC-5EEA-48C8-A1C1-B53389F98999", "EFI_SMM_SW_DISPATCH2_PROTOCOL_GUID"),
    ("456D2859-A84B-4E47-A2EE-3276D886997D", "EFI_SMM_SX_DISPATCH2_PROTOCOL_GUID"),
    ("4CEC368E-8E8E-4D71-8BE1-958C45FC8A53", "EFI_SMM_PERIODIC_TIMER_DISPATCH2_PROTOCOL_GUID"),
    ("EE9B8D90-C5A6-40A2-BDE2-52558D33CCA1", "EFI_SMM_USB_DISPATCH2_PROTOCOL_GUID"),
    ("25566B03-B577-4CBF-958C-ED663EA24380", "EFI_SMM_GPI_DISPATCH2_PROTOCOL_GUID"),
    ("1B1183FA-1823-46A7-8872-9C578755409D", "EFI_SMM_POWER_BUTTON_DISPATCH2_PROTOCOL_GUID"),
    ("EB346B97-975F-4A9F-8B22-F8E92BB3D569", "EFI_SMM_CPU_PROTOCOL_GUID"),
    ("ED32D533-99E6-4209-9CC0-2D72CDD998A7", "EFI_SMM_VARIABLE_PROTOCOL_GUID"),
    ("47B7FA8C-F4BD-4AF6-8200-333086F0D2C8", "EFI_SMM_READY_TO_LOCK_PROTOCOL_GUID"),
    ("60FF8964-E906-41D0-AFED-F241E974E08E", "EFI_DXE_SMM_READY_TO_LOCK_PROTOCOL_GUID"),
    ("24E70042-D5C5-4260-8C39-0AD3AA32E93D", "EFI_SMM_END_OF_DXE_PROTOCOL_GUID"),
    // Event groups
    ("02CE967A-DD7E-4FFC-9EE7-810CF0470880", "EFI_END_OF_DXE_EVENT_GROUP_GUID"),
    ("7CE88FB3-4BD7-4679-87A8-A8D8DEE50D2B", "EFI_EVENT_GROUP_READY_TO_BOOT"),
    ("27ABF055-B1B8-4C26-8048-748F37BAA2DF", "EFI_EVENT_GROUP_EXIT_BOOT_SERVICES"),
    ("13FA7698-C831-49C7-87EA-8F43FCC25196", "EFI_EVENT_GROUP_VIRTUAL_ADDRESS_CHANGE"),
    ("78BEE926-692F-48FD-9EDB-01422EF0D7AB", "EFI_EVENT_GROUP_MEMORY_MAP_CHANGE"),
    ("2A571201-4966-47F6-8B86-F31E41F32F10", "EFI_EVENT_LEGACY_BOOT_GUID"),
    // Configuration tables
    ("EB9D2D30-2D88-11D3-9A16-0090273FC14D", "ACPI_TABLE_GUID"),
    ("8868E871-E4F1-11D3-BC22-0080C73C8881", "EFI_ACPI_TABLE_GUID"),
    ("EB9D2D31-2D88-11D3-9A16-0090273FC14D", "SMBIOS_TABLE_GUID"),
    ("F2FD1544-9794-4A2C-992E-E5BBCF20E394", "SMBIOS3_TABLE_GUID"),
    ("7739F24C-93D7-11D4-9A3A-0090273FC14D", "EFI_HOB_LIST_GUID"),
    ("05AD34BA-6F02-4214-952E-4DA0398E2BB9", "EFI_DXE_SERVICES_TABLE_GUID"),
    ("4C19049F-4137-4DD3-9C10-8B97A83FFDFA", "EFI_MEMORY_TYPE_INFORMATION_GUID"),
    // Variables
    ("8BE4DF61-93CA-11D2-AA0D-00E098032B8C", "EFI_GLOBAL_VARIABLE"),
    ("D719B2CB-3D3A-4596-A3BC-DAD00E67656F", "EFI_IMAGE_SECURITY_DATABASE_GUID"),
    ("A5C059A1-94E4-4AA7-87B5-AB155C2BF072", "EFI_CERT_X509_GUID"),
    ("C1C41626-504C-4092-ACA9-41F936934328", "EFI_CERT_SHA256_GUID"),
    // Shell
    ("6302D008-7F9B-4F30-87AC-60C9FEF5DA4E", "EFI_SHELL_PROTOCOL_GUID"),
    ("752F3136-4E16-4FDC-A22A-E5F46812F4CA", "EFI_SHELL_PARAMETERS_PROTOCOL_GUID"),
];

pub static KNOWN_GUIDS: Lazy<Vec<KnownGuid>> = Lazy::new(|| {
    KNOWN_GUID_TEXT
        .iter()
        .filter_map(|&(text, name)| match text.parse::<Guid>() {
            Ok(guid) => Some(KnownGuid { guid, name }),
            Err(e) => {
                log::error!("Skipping known GUID {}: {}", name, e);
                None
            }
        })
        .collect()
});

pub fn known_guid_name(guid: &Guid) -> Option<&'static str> {
    KNOWN_GUIDS.iter().find(|k| k.guid == *guid).map(|k| k.name)
}
